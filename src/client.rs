// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fetch-and-verify routine on top of a beacon source.
//!
//! The verifier itself is silent; outcomes are logged here, on the caller side.

use crate::config::Config;
use crate::core::MessageBuilder;
use crate::core::MessageEncoding;
use crate::core::Randomness;
use crate::core::RoundRecord;
use crate::core::RoundVerifier;
use crate::core::Scheme;
use crate::key::PublicKey;
use crate::log::Logger;
use crate::net::public::PublicClient;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use tracing::debug;
use tracing::error;
use tracing::info;

/// Supplier of the distributed key and of signed rounds.
#[tonic::async_trait]
pub trait BeaconSource: Send {
    async fn dist_key(&mut self) -> Result<Vec<u8>>;

    /// Round 0 requests the latest round.
    async fn public_rand(&mut self, round: u64) -> Result<RoundRecord>;
}

/// Verification session: the public key is resolved once and reused for
/// every round fetched afterwards.
pub struct Session<M = MessageEncoding> {
    verifier: RoundVerifier<M>,
    key: PublicKey,
    log: Logger,
}

impl<M: MessageBuilder> Session<M> {
    /// Uses `pinned_key` when given, otherwise asks the source for its distributed key.
    pub async fn open<S: BeaconSource + ?Sized>(
        source: &mut S,
        verifier: RoundVerifier<M>,
        pinned_key: Option<&[u8]>,
        log: Logger,
    ) -> Result<Self> {
        let raw_key = match pinned_key {
            Some(key) => {
                debug!(parent: &log.span, "using pinned public key");
                key.to_vec()
            }
            None => source.dist_key().await.map_err(|err| {
                error!(parent: &log.span, "could not get distributed key: {err:#}");
                err
            })?,
        };

        let key = verifier.decode_public_key(&raw_key).map_err(|err| {
            error!(parent: &log.span, "invalid distributed key {}: {err}", hex::encode(&raw_key));
            err
        })?;
        info!(parent: &log.span, "public key: {}, scheme: {}", hex::encode(key.serialize()), verifier.scheme().id);

        Ok(Self { verifier, key, log })
    }

    /// Fetches `round` (0 for latest) and verifies it.
    pub async fn fetch<S: BeaconSource + ?Sized>(
        &self,
        source: &mut S,
        round: u64,
    ) -> Result<Randomness> {
        let log = self.log.new_round(round);
        let record = source.public_rand(round).await.map_err(|err| {
            error!(parent: &log.span, "could not get public randomness: {err:#}");
            err
        })?;

        if round != 0 && record.round != round {
            error!(parent: &log.span, "requested round {round}, received {}", record.round);
            bail!("requested round {round}, received {}", record.round)
        }
        debug!(parent: &log.span, "received {record}");

        let randomness = self
            .verifier
            .verify_with_key(
                &self.key,
                &record.signature,
                record.round,
                &record.previous_signature,
                &record.randomness,
            )
            .map_err(|err| {
                error!(parent: &log.span, "invalid random number for round {}: {err}", record.round);
                err
            })?;
        info!(parent: &log.span, "valid random number for round {}: {randomness}", randomness.round);

        Ok(randomness)
    }
}

/// Connects to the configured server, fetches `round` and verifies it.
pub async fn fetch_randomness(config: &Config, round: u64) -> Result<Randomness> {
    let log = Logger::register_source(config.address.as_str());
    let pinned_key = config.pinned_key()?;

    let mut client = PublicClient::connect(&config.address, config.tls, config.timeout.into())
        .await
        .map_err(|err| {
            error!(parent: &log.span, "failed connecting to {}: {err}", config.address);
            err
        })?;

    let verifier = RoundVerifier::new(Scheme::from_id(config.scheme));
    let session = Session::open(&mut client, verifier, pinned_key.as_deref(), log)
        .await
        .context("open session")?;

    session.fetch(&mut client, round).await
}
