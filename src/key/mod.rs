mod convert;
pub mod point;

pub use convert::decode_hex;
pub use point::PointError;
pub use point::PublicKey;
pub use point::Signature;
