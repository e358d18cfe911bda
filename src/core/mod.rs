//! Verification and randomness derivation for beacon rounds.

pub mod message;
pub mod randomness;
pub mod round;
pub mod scheme;
pub mod verifier;

pub use message::MessageBuilder;
pub use message::MessageEncoding;
pub use randomness::Randomness;
pub use randomness::RandomnessHash;
pub use round::RoundRecord;
pub use scheme::Scheme;
pub use scheme::SchemeId;
pub use verifier::Field;
pub use verifier::RoundVerifier;
pub use verifier::VerifyError;
