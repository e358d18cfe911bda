use sha2::Digest;
use sha2::Sha256;
use sha2::Sha512;

use std::fmt::Display;

/// One-way hash extracting randomness from a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomnessHash {
    Sha256,
    Sha512,
}

impl RandomnessHash {
    /// Digest of the raw signature bytes. Nothing else is hashed: the value is
    /// reproducible from the signature alone.
    pub fn derive(&self, signature: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(signature).to_vec(),
            Self::Sha512 => Sha512::digest(signature).to_vec(),
        }
    }
}

/// Authenticated randomness of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Randomness {
    pub round: u64,
    pub value: Vec<u8>,
}

impl Display for Randomness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(&self.value))
    }
}
