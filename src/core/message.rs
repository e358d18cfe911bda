//! Canonical message covered by a round signature.

use sha2::Digest;
use sha2::Sha256;

/// Builds the message signed for a given round.
///
/// Implementations must be pure: signers and verifiers agree on these bytes
/// or no signature will ever verify.
pub trait MessageBuilder {
    fn build(&self, previous_signature: &[u8], round: u64) -> Vec<u8>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEncoding {
    /// `round_be || previous_signature`, no hashing.
    RoundThenPrevious,
    /// `SHA-256(previous_signature || round_be)`.
    ChainedDigest,
    /// `SHA-256(round_be)`, previous signature is ignored.
    UnchainedDigest,
}

impl MessageBuilder for MessageEncoding {
    fn build(&self, previous_signature: &[u8], round: u64) -> Vec<u8> {
        match self {
            Self::RoundThenPrevious => round_then_previous(previous_signature, round),
            Self::ChainedDigest => {
                let mut h = Sha256::new();
                h.update(previous_signature);
                h.update(round.to_be_bytes());
                h.finalize().to_vec()
            }
            Self::UnchainedDigest => Sha256::digest(round.to_be_bytes()).to_vec(),
        }
    }
}

/// Legacy chained message: eight bytes of big-endian round followed by the raw
/// previous signature. At genesis the previous signature is empty.
pub fn round_then_previous(previous_signature: &[u8], round: u64) -> Vec<u8> {
    let mut msg = Vec::with_capacity(8 + previous_signature.len());
    msg.extend_from_slice(&round.to_be_bytes());
    msg.extend_from_slice(previous_signature);
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_layout() {
        let msg = round_then_previous(&[0xaa, 0xbb], 0x0102);
        assert_eq!(msg, [0, 0, 0, 0, 0, 0, 1, 2, 0xaa, 0xbb]);
    }

    #[test]
    fn genesis_message_is_round_only() {
        let msg = MessageEncoding::RoundThenPrevious.build(&[], 0);
        assert_eq!(msg, [0u8; 8]);
        assert_eq!(msg, MessageEncoding::RoundThenPrevious.build(&[], 0));
    }

    #[test]
    fn deterministic_for_all_encodings() {
        let prev = hex::decode("a2237ee39a1a6569").unwrap();
        for enc in [
            MessageEncoding::RoundThenPrevious,
            MessageEncoding::ChainedDigest,
            MessageEncoding::UnchainedDigest,
        ] {
            assert_eq!(enc.build(&prev, 397089), enc.build(&prev, 397089));
            assert_ne!(enc.build(&prev, 397089), enc.build(&prev, 397088));
        }
    }

    #[test]
    fn chained_digest_binds_previous() {
        let enc = MessageEncoding::ChainedDigest;
        assert_ne!(enc.build(&[1], 7), enc.build(&[2], 7));

        let mut h = Sha256::new();
        h.update([1u8]);
        h.update(7u64.to_be_bytes());
        assert_eq!(enc.build(&[1], 7), h.finalize().to_vec());
    }

    #[test]
    fn unchained_digest_ignores_previous() {
        let enc = MessageEncoding::UnchainedDigest;
        assert_eq!(enc.build(&[1, 2, 3], 1000), enc.build(&[], 1000));
        assert_eq!(
            enc.build(&[], 1000),
            Sha256::digest(1000u64.to_be_bytes()).to_vec()
        );
    }
}
