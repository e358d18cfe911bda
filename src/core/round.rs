use super::Field;
use super::VerifyError;
use crate::key::decode_hex;
use crate::protobuf::drand::PublicRandResponse;

/// One beacon pulse as delivered by a randomness server.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u64,
    pub previous_signature: Vec<u8>,
    pub signature: Vec<u8>,
    /// Randomness claimed by the server, checked against the signature digest.
    pub randomness: Vec<u8>,
}

impl RoundRecord {
    pub fn from_hex(
        round: u64,
        signature: &str,
        previous_signature: &str,
        randomness: &str,
    ) -> Result<Self, VerifyError> {
        Ok(Self {
            round,
            signature: decode_hex(Field::Signature, signature)?,
            previous_signature: decode_hex(Field::PreviousSignature, previous_signature)?,
            randomness: decode_hex(Field::Randomness, randomness)?,
        })
    }

    pub fn from_packet(packet: PublicRandResponse) -> Self {
        let PublicRandResponse {
            round,
            previous,
            signature,
            randomness,
        } = packet;

        Self {
            round,
            previous_signature: previous,
            signature,
            randomness,
        }
    }
}

impl From<PublicRandResponse> for RoundRecord {
    fn from(packet: PublicRandResponse) -> Self {
        Self::from_packet(packet)
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round: {}, signature: {}, previous: {}",
            self.round,
            hex::encode(&self.signature),
            hex::encode(&self.previous_signature)
        )
    }
}
