//! Converts between the hex representation used at the transport boundary and raw bytes.

use crate::core::Field;
use crate::core::VerifyError;

/// Decodes a hex field, reporting the offending field on failure.
/// Empty input decodes to an empty buffer.
pub fn decode_hex(field: Field, text: &str) -> Result<Vec<u8>, VerifyError> {
    hex::decode(text.trim()).map_err(|_| VerifyError::Decode(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_hex_names_field() {
        assert_eq!(
            decode_hex(Field::PreviousSignature, "zz"),
            Err(VerifyError::Decode(Field::PreviousSignature))
        );
        assert_eq!(
            decode_hex(Field::Signature, "abc"),
            Err(VerifyError::Decode(Field::Signature))
        );
    }

    #[test]
    fn empty_is_allowed() {
        assert_eq!(decode_hex(Field::PreviousSignature, ""), Ok(vec![]));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(decode_hex(Field::Signature, " aabb\n"), Ok(vec![0xaa, 0xbb]));
    }
}
