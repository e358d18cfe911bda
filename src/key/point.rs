// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! BLS12-381 points for both key placements.
//!
//! Deserialization always validates: infinity and points outside the prime
//! order subgroup are rejected, so a decoded value is never a silent default.
//! Only the compressed encoding is accepted, each point has exactly one byte form.

use crate::core::scheme::KeyGroup;

use blst::min_pk;
use blst::min_sig;
use blst::BLST_ERROR;

/// Compressed sizes of G1 and G2 points.
pub const G1_SIZE: usize = 48;
pub const G2_SIZE: usize = 96;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("point deserialization: {0:?}")]
pub struct PointError(pub BLST_ERROR);

/// Distributed public key of a beacon.
#[derive(Debug, Clone)]
pub enum PublicKey {
    G1(min_pk::PublicKey),
    G2(min_sig::PublicKey),
}

/// Recovered (threshold) signature of a round.
#[derive(Debug, Clone)]
pub enum Signature {
    G2(min_pk::Signature),
    G1(min_sig::Signature),
}

/// blst also parses the uncompressed form, which would give a second encoding
/// of the same point.
fn compressed(bytes: &[u8], size: usize) -> Result<&[u8], PointError> {
    if bytes.len() != size {
        return Err(PointError(BLST_ERROR::BLST_BAD_ENCODING));
    }
    Ok(bytes)
}

impl PublicKey {
    pub fn deserialize(group: KeyGroup, bytes: &[u8]) -> Result<Self, PointError> {
        let bytes = compressed(
            bytes,
            match group {
                KeyGroup::G1 => G1_SIZE,
                KeyGroup::G2 => G2_SIZE,
            },
        )?;
        let key = match group {
            KeyGroup::G1 => Self::G1(min_pk::PublicKey::key_validate(bytes).map_err(PointError)?),
            KeyGroup::G2 => Self::G2(min_sig::PublicKey::key_validate(bytes).map_err(PointError)?),
        };
        Ok(key)
    }

    /// Compressed encoding.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::G1(pk) => pk.to_bytes().to_vec(),
            Self::G2(pk) => pk.to_bytes().to_vec(),
        }
    }

    pub fn group(&self) -> KeyGroup {
        match self {
            Self::G1(_) => KeyGroup::G1,
            Self::G2(_) => KeyGroup::G2,
        }
    }

    /// BLS verification of `sig` over `msg`. A signature from the other
    /// placement never verifies.
    pub fn verify(&self, sig: &Signature, msg: &[u8], dst: &[u8]) -> bool {
        let res = match (self, sig) {
            (Self::G1(pk), Signature::G2(sig)) => sig.verify(true, msg, dst, &[], pk, false),
            (Self::G2(pk), Signature::G1(sig)) => sig.verify(true, msg, dst, &[], pk, false),
            _ => return false,
        };
        res == BLST_ERROR::BLST_SUCCESS
    }
}

impl Signature {
    /// Signature group is the opposite of the key group.
    pub fn deserialize(key_group: KeyGroup, bytes: &[u8]) -> Result<Self, PointError> {
        let bytes = compressed(
            bytes,
            match key_group {
                KeyGroup::G1 => G2_SIZE,
                KeyGroup::G2 => G1_SIZE,
            },
        )?;
        let sig = match key_group {
            KeyGroup::G1 => Self::G2(min_pk::Signature::sig_validate(bytes, true).map_err(PointError)?),
            KeyGroup::G2 => Self::G1(min_sig::Signature::sig_validate(bytes, true).map_err(PointError)?),
        };
        Ok(sig)
    }
}
