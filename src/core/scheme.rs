// Copyright (C) 2023-2024 StorSwift Inc.
// This file is part of the Drand-RS library.

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scheme parameters of a randomness beacon.
//!
//! A [`Scheme`] is a plain value: verifiers for different beacons may run side
//! by side in one process, each holding its own parameters.

use super::message::MessageEncoding;
use super::randomness::RandomnessHash;

use std::fmt::Display;
use std::str::FromStr;

/// Hash-to-curve domain separation tag for signatures on G2.
pub const DST_G2: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";
/// Hash-to-curve domain separation tag for signatures on G1.
pub const DST_G1: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";

pub const DEFAULT_SCHEME: &str = SchemeId::LEGACY;

/// Placement of the public key and signature in BLS12-381.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGroup {
    /// Public key on G1 (48 bytes), signatures on G2 (96 bytes).
    G1,
    /// Public key on G2 (96 bytes), signatures on G1 (48 bytes).
    G2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeId {
    #[default]
    Legacy,
    Chained,
    Unchained,
    UnchainedOnG1,
}

impl SchemeId {
    pub const LEGACY: &'static str = "legacy-bls-chained";
    pub const CHAINED: &'static str = "pedersen-bls-chained";
    pub const UNCHAINED: &'static str = "pedersen-bls-unchained";
    pub const UNCHAINED_ON_G1: &'static str = "bls-unchained-g1-rfc9380";

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeId::Legacy => Self::LEGACY,
            SchemeId::Chained => Self::CHAINED,
            SchemeId::Unchained => Self::UNCHAINED,
            SchemeId::UnchainedOnG1 => Self::UNCHAINED_ON_G1,
        }
    }

    pub fn list_schemes() -> Vec<String> {
        vec![
            Self::LEGACY.into(),
            Self::CHAINED.into(),
            Self::UNCHAINED.into(),
            Self::UNCHAINED_ON_G1.into(),
        ]
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown scheme: {0}")]
pub struct UnknownScheme(String);

impl FromStr for SchemeId {
    type Err = UnknownScheme;

    fn from_str(scheme: &str) -> Result<Self, Self::Err> {
        let id = match scheme {
            Self::LEGACY => Self::Legacy,
            Self::CHAINED => Self::Chained,
            Self::UNCHAINED => Self::Unchained,
            Self::UNCHAINED_ON_G1 => Self::UnchainedOnG1,
            _ => return Err(UnknownScheme(scheme.into())),
        };
        Ok(id)
    }
}

impl Display for SchemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full set of parameters needed to verify a beacon round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub id: SchemeId,
    pub key_group: KeyGroup,
    pub dst: &'static [u8],
    pub encoding: MessageEncoding,
    pub randomness: RandomnessHash,
}

impl Scheme {
    pub fn from_id(id: SchemeId) -> Self {
        match id {
            SchemeId::Legacy => Self {
                id,
                key_group: KeyGroup::G1,
                dst: DST_G2,
                encoding: MessageEncoding::RoundThenPrevious,
                randomness: RandomnessHash::Sha512,
            },
            SchemeId::Chained => Self {
                id,
                key_group: KeyGroup::G1,
                dst: DST_G2,
                encoding: MessageEncoding::ChainedDigest,
                randomness: RandomnessHash::Sha256,
            },
            SchemeId::Unchained => Self {
                id,
                key_group: KeyGroup::G1,
                dst: DST_G2,
                encoding: MessageEncoding::UnchainedDigest,
                randomness: RandomnessHash::Sha256,
            },
            SchemeId::UnchainedOnG1 => Self {
                id,
                key_group: KeyGroup::G2,
                dst: DST_G1,
                encoding: MessageEncoding::UnchainedDigest,
                randomness: RandomnessHash::Sha256,
            },
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::from_id(SchemeId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip() {
        for id in SchemeId::list_schemes() {
            let parsed: SchemeId = id.parse().unwrap();
            assert_eq!(parsed.as_str(), id);
            assert_eq!(Scheme::from_id(parsed).id, parsed);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            "bls-chained".parse::<SchemeId>(),
            Err(UnknownScheme("bls-chained".into()))
        );
    }

    #[test]
    fn default_is_legacy() {
        let scheme = Scheme::default();
        assert_eq!(scheme.id.as_str(), DEFAULT_SCHEME);
        assert_eq!(scheme.randomness, RandomnessHash::Sha512);
        assert_eq!(scheme.encoding, MessageEncoding::RoundThenPrevious);
    }

    #[test]
    fn g1_signatures_use_g1_tag() {
        let scheme = Scheme::from_id(SchemeId::UnchainedOnG1);
        assert_eq!(scheme.key_group, KeyGroup::G2);
        assert_eq!(scheme.dst, DST_G1);
        assert_eq!(scheme.encoding, MessageEncoding::UnchainedDigest);
    }
}
