use crate::client::fetch_randomness;
use crate::config::Config;
use crate::core::scheme::DEFAULT_SCHEME;
use crate::core::Field;
use crate::core::Randomness;
use crate::core::RoundRecord;
use crate::core::RoundVerifier;
use crate::core::Scheme;
use crate::core::SchemeId;
use crate::key::decode_hex;
use crate::log::init_log;
use crate::net::utils::Address;
use crate::net::utils::Seconds;

use anyhow::Context;
use clap::arg;
use clap::command;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "drand-verifier")]
#[command(about = "Fetch and verify drand randomness", long_about = None)]
pub struct Cli {
    #[arg(long, global = true)]
    verbose: bool,
    /// Path to the config file, defaults to ~/.drand/verifier.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Parser)]
pub enum Commands {
    /// Fetch a round from a drand node and verify it. Flags override values from the config file.
    Fetch {
        /// Address of the node in form of HOST:PORT
        #[arg(long)]
        address: Option<Address>,
        /// Round to fetch, 0 requests the latest one
        #[arg(long, default_value_t = 0)]
        round: u64,
        /// Use TLS for the connection
        #[arg(long)]
        tls: bool,
        /// Connection and request timeout, e.g. "5s"
        #[arg(long)]
        timeout: Option<Seconds>,
        /// Scheme id of the chain
        #[arg(long)]
        scheme: Option<SchemeId>,
        /// Hex encoded public key of the chain, skips the key request
        #[arg(long)]
        public_key: Option<String>,
    },
    /// Verify a round given as hex encoded values, no network involved.
    Verify {
        #[arg(long, default_value = DEFAULT_SCHEME)]
        scheme: SchemeId,
        #[arg(long)]
        public_key: String,
        #[arg(long)]
        signature: String,
        /// Signature of the previous round, empty for unchained schemes
        #[arg(long, default_value = "")]
        previous: String,
        #[arg(long)]
        round: u64,
        #[arg(long)]
        randomness: String,
    },
    #[command(subcommand)]
    Util(Util),
}

#[derive(Subcommand, Debug)]
pub enum Util {
    /// List all scheme ids available to use
    ListSchemes,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_log(self.verbose)?;
        match self.commands {
            Commands::Fetch {
                address,
                round,
                tls,
                timeout,
                scheme,
                public_key,
            } => {
                let mut config = Config::load(self.config.as_deref())?;
                if let Some(address) = address {
                    config.address = address;
                }
                // flag can only enable TLS, disabling is done in the config file
                config.tls |= tls;
                if let Some(timeout) = timeout {
                    config.timeout = timeout;
                }
                if let Some(scheme) = scheme {
                    config.scheme = scheme;
                }
                if public_key.is_some() {
                    config.public_key = public_key;
                }

                let randomness = fetch_randomness(&config, round).await?;
                println!("{}: {randomness}", randomness.round);
            }
            Commands::Verify {
                scheme,
                public_key,
                signature,
                previous,
                round,
                randomness,
            } => {
                let randomness =
                    verify_hex(scheme, &public_key, &signature, &previous, round, &randomness)?;
                println!("{}: {randomness}", randomness.round);
            }
            Commands::Util(util) => match util {
                Util::ListSchemes => {
                    for id in SchemeId::list_schemes() {
                        println!("{id}");
                    }
                }
            },
        }
        Ok(())
    }
}

/// Offline verification of hex encoded inputs.
fn verify_hex(
    scheme: SchemeId,
    public_key: &str,
    signature: &str,
    previous: &str,
    round: u64,
    randomness: &str,
) -> anyhow::Result<Randomness> {
    let key = decode_hex(Field::PublicKey, public_key)?;
    let record = RoundRecord::from_hex(round, signature, previous, randomness)?;
    let verifier = RoundVerifier::new(Scheme::from_id(scheme));

    verifier
        .verify_record(&key, &record)
        .with_context(|| format!("round {round}"))
}
