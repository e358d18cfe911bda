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

//! Verifier configuration, stored as TOML.
//!
//! ```toml
//! Address = "localhost:8081"
//! TLS = false
//! Timeout = "1s"
//! Scheme = "legacy-bls-chained"
//! PublicKey = "88a8..."
//! ```
//! Every key is optional, missing keys keep their default value.

use crate::core::Field;
use crate::core::SchemeId;
use crate::key::decode_hex;
use crate::net::utils::Address;
use crate::net::utils::Seconds;

use anyhow::Result;
use std::path::Path;
use std::path::PathBuf;
use toml::Table;
use toml::Value;

const DEFAULT_FOLDER: &str = ".drand";
const CONFIG_FILE: &str = "verifier.toml";

/// Get optional value by $key:&str, define resulting type of value by $method
macro_rules! get {
    ($map:expr, $key:literal, $method:ident) => {
        match $map.get($key) {
            Some(v) => Some(
                v.$method()
                    .ok_or_else(|| anyhow::anyhow!(concat!("unexpected type of ", $key)))?,
            ),
            None => None,
        }
    };
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub address: Address,
    pub tls: bool,
    pub timeout: Seconds,
    pub scheme: SchemeId,
    /// Hex encoded public key. When set, the distributed key is not requested from the server.
    pub public_key: Option<String>,
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self> {
        let table: Table = toml::from_str(data)?;
        let mut config = Self::default();

        if let Some(address) = get!(table, "Address", as_str) {
            config.address = Address::precheck(address)?;
        }
        if let Some(tls) = get!(table, "TLS", as_bool) {
            config.tls = tls;
        }
        if let Some(timeout) = get!(table, "Timeout", as_str) {
            config.timeout = timeout.parse()?;
        }
        if let Some(scheme) = get!(table, "Scheme", as_str) {
            config.scheme = scheme.parse()?;
        }
        if let Some(key) = get!(table, "PublicKey", as_str) {
            config.public_key = Some(key.to_string());
        }

        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        let mut table = Table::new();
        table.insert("Address".into(), self.address.to_string().into());
        table.insert("TLS".into(), self.tls.into());
        table.insert("Timeout".into(), self.timeout.to_string().into());
        table.insert("Scheme".into(), self.scheme.to_string().into());
        if let Some(key) = &self.public_key {
            table.insert("PublicKey".into(), Value::String(key.clone()));
        }

        Ok(toml::to_string(&table)?)
    }

    /// Loads config from `path`. Without explicit path the default location is
    /// tried and a missing file yields the default config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&read_to_string(path)?),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_toml(&read_to_string(&path)?),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(DEFAULT_FOLDER).join(CONFIG_FILE))
    }

    /// Decoded pinned key, if configured.
    pub fn pinned_key(&self) -> Result<Option<Vec<u8>>> {
        let key = self
            .public_key
            .as_deref()
            .map(|key| decode_hex(Field::PublicKey, key))
            .transpose()?;

        Ok(key)
    }
}

fn read_to_string(p: &Path) -> Result<String> {
    std::fs::read_to_string(p)
        .map_err(|e| anyhow::anyhow!("Error reading: {}, :{e:?}", p.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VerifyError;

    #[test]
    fn empty_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address.as_str(), "localhost:8081");
        assert_eq!(config.timeout, Seconds::new(1));
        assert_eq!(config.scheme, SchemeId::Legacy);
        assert!(!config.tls);
    }

    #[test]
    fn full_config() {
        let data = r#"
            Address = "drand.example:443"
            TLS = true
            Timeout = "5s"
            Scheme = "pedersen-bls-chained"
            PublicKey = "aabb"
        "#;
        let config = Config::from_toml(data).unwrap();
        assert_eq!(config.address.as_str(), "drand.example:443");
        assert!(config.tls);
        assert_eq!(config.timeout, Seconds::new(5));
        assert_eq!(config.scheme, SchemeId::Chained);
        assert_eq!(config.pinned_key().unwrap(), Some(vec![0xaa, 0xbb]));

        assert_eq!(Config::from_toml(&config.to_toml().unwrap()).unwrap(), config);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(Config::from_toml(r#"Address = "localhost""#).is_err());
        assert!(Config::from_toml("TLS = \"yes\"").is_err());
        assert!(Config::from_toml(r#"Timeout = "5""#).is_err());
        assert!(Config::from_toml(r#"Scheme = "unknown""#).is_err());
    }

    #[test]
    fn malformed_pinned_key() {
        let config = Config {
            public_key: Some("xyz".into()),
            ..Default::default()
        };
        let err = config.pinned_key().unwrap_err();
        assert_eq!(
            err.downcast_ref::<VerifyError>(),
            Some(&VerifyError::Decode(Field::PublicKey))
        );
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("drand-verifier-{}.toml", std::process::id()));
        std::fs::write(&path, "Timeout = \"2s\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.timeout, Seconds::new(2));
        std::fs::remove_file(&path).unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}
