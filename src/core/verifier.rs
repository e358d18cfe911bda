// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Verification of a single beacon round.
//!
//! The verifier is a short-circuiting pipeline:
//!  1. decode the public key,
//!  2. decode the signature,
//!  3. build the round message,
//!  4. verify the signature over the round message,
//!  5. check that the signature does NOT also verify for the preceding round,
//!  6. derive randomness from the signature bytes,
//!  7. compare it with the claimed randomness,
//!  8. return the round and its randomness.
//!
//! Nothing is logged here, every failure is returned to the caller.

use super::message::MessageBuilder;
use super::message::MessageEncoding;
use super::randomness::Randomness;
use super::round::RoundRecord;
use super::scheme::Scheme;
use crate::key::PublicKey;
use crate::key::Signature;

use std::fmt::Display;

/// Input that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PublicKey,
    Signature,
    PreviousSignature,
    Randomness,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::PublicKey => "public key",
            Field::Signature => "signature",
            Field::PreviousSignature => "previous signature",
            Field::Randomness => "randomness",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    #[error("failed to decode {0}")]
    Decode(Field),
    #[error("signature does not verify for the round message")]
    SignatureInvalid,
    #[error("signature also verifies for the preceding round")]
    AmbiguousRoundBinding,
    #[error("claimed randomness does not match the signature digest")]
    RandomnessMismatch,
}

/// Stateless verifier for one beacon scheme. Holds no mutable state and may be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct RoundVerifier<M = MessageEncoding> {
    scheme: Scheme,
    messages: M,
}

impl RoundVerifier {
    pub fn new(scheme: Scheme) -> Self {
        Self {
            messages: scheme.encoding,
            scheme,
        }
    }
}

impl<M: MessageBuilder> RoundVerifier<M> {
    /// Verifier with a custom message layout. Curve, tag and randomness hash
    /// are still taken from `scheme`.
    pub fn with_message_builder(scheme: Scheme, messages: M) -> Self {
        Self { scheme, messages }
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Decodes `public_key` and verifies the round.
    pub fn verify(
        &self,
        public_key: &[u8],
        signature: &[u8],
        round: u64,
        previous_signature: &[u8],
        claimed_randomness: &[u8],
    ) -> Result<Randomness, VerifyError> {
        let key = self.decode_public_key(public_key)?;
        self.verify_with_key(
            &key,
            signature,
            round,
            previous_signature,
            claimed_randomness,
        )
    }

    pub fn verify_record(
        &self,
        public_key: &[u8],
        record: &RoundRecord,
    ) -> Result<Randomness, VerifyError> {
        self.verify(
            public_key,
            &record.signature,
            record.round,
            &record.previous_signature,
            &record.randomness,
        )
    }

    /// Decodes a key once so it can be reused across rounds of a session.
    pub fn decode_public_key(&self, public_key: &[u8]) -> Result<PublicKey, VerifyError> {
        PublicKey::deserialize(self.scheme.key_group, public_key)
            .map_err(|_| VerifyError::Decode(Field::PublicKey))
    }

    /// Verification with an already decoded public key.
    pub fn verify_with_key(
        &self,
        key: &PublicKey,
        signature: &[u8],
        round: u64,
        previous_signature: &[u8],
        claimed_randomness: &[u8],
    ) -> Result<Randomness, VerifyError> {
        if key.group() != self.scheme.key_group {
            return Err(VerifyError::Decode(Field::PublicKey));
        }
        let sig = Signature::deserialize(self.scheme.key_group, signature)
            .map_err(|_| VerifyError::Decode(Field::Signature))?;

        self.check_signature(key, &sig, previous_signature, round)?;
        self.check_round_binding(key, &sig, previous_signature, round)?;

        let value = self.scheme.randomness.derive(signature);
        if value != claimed_randomness {
            return Err(VerifyError::RandomnessMismatch);
        }

        Ok(Randomness { round, value })
    }

    fn check_signature(
        &self,
        key: &PublicKey,
        sig: &Signature,
        previous_signature: &[u8],
        round: u64,
    ) -> Result<(), VerifyError> {
        let msg = self.messages.build(previous_signature, round);
        if !key.verify(sig, &msg, self.scheme.dst) {
            return Err(VerifyError::SignatureInvalid);
        }
        Ok(())
    }

    /// Inverted check: on the happy path the signature must FAIL to verify for
    /// `round - 1` under the same previous signature. Success here means the
    /// message layout does not bind the round number.
    ///
    /// Round 0 has no predecessor and is not checked.
    fn check_round_binding(
        &self,
        key: &PublicKey,
        sig: &Signature,
        previous_signature: &[u8],
        round: u64,
    ) -> Result<(), VerifyError> {
        let Some(preceding) = round.checked_sub(1) else {
            return Ok(());
        };
        let inv_msg = self.messages.build(previous_signature, preceding);
        if key.verify(sig, &inv_msg, self.scheme.dst) {
            return Err(VerifyError::AmbiguousRoundBinding);
        }
        Ok(())
    }
}
