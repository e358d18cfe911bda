//! Types and client of the drand API, generated by `build.rs` from `drand.proto`.

pub mod drand;

#[cfg(test)]
mod tests {
    use super::drand::DistKeyResponse;
    use super::drand::PublicRandResponse;
    use prost::Message;

    #[test]
    fn response_wire_format() {
        let resp = PublicRandResponse {
            round: 1,
            previous: vec![0xaa],
            signature: vec![0xbb],
            randomness: vec![],
        };
        // field 1 varint, fields 2 and 3 length-delimited, empty field 4 omitted
        assert_eq!(
            resp.encode_to_vec(),
            [0x08, 0x01, 0x12, 0x01, 0xaa, 0x1a, 0x01, 0xbb]
        );
        assert_eq!(PublicRandResponse::decode(&resp.encode_to_vec()[..]).unwrap(), resp);
    }

    #[test]
    fn dist_key_uses_tag_two() {
        let resp = DistKeyResponse { key: vec![1, 2] };
        assert_eq!(resp.encode_to_vec(), [0x12, 0x02, 1, 2]);
    }
}
