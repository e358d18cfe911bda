use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::uri::Uri;
use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tonic::transport::Channel;
use tonic::transport::ClientTlsConfig;

pub const DEFAULT_ADDRESS: &str = "localhost:8081";

/// Implementation of authority component of a URI which is always contain host and port.
/// For validation rules, see [`Address::precheck`].
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Address(Authority);

impl Address {
    pub fn precheck(data: &str) -> Result<Self, InvalidAddress> {
        let authority = data
            .parse::<http::uri::Authority>()
            .map_err(|err| InvalidAddress(format!("{data}, source: {err:?}")))?;

        if authority.host().is_empty() || authority.port().is_none() {
            return Err(InvalidAddress(data.into()));
        }

        Ok(Self(authority))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::precheck(s)
    }
}

impl Default for Address {
    fn default() -> Self {
        Self(Authority::from_static(DEFAULT_ADDRESS))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("expected valid host:port, received {0}")]
pub struct InvalidAddress(String);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Seconds {
    value: u32,
}

impl Seconds {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl Default for Seconds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl From<u32> for Seconds {
    fn from(value: u32) -> Self {
        Seconds { value }
    }
}

impl From<Seconds> for Duration {
    fn from(seconds: Seconds) -> Self {
        Duration::from_secs(u64::from(seconds.value))
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("expected seconds in form of '10s'")]
pub struct ParseSecondsError;

impl FromStr for Seconds {
    type Err = ParseSecondsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value
            .strip_suffix("s")
            .ok_or(ParseSecondsError)?
            .parse()
            .map_err(|_| ParseSecondsError)?;

        Ok(Self::new(value))
    }
}

/// Error type for failed connection attempt, contains address and underlying error
#[derive(thiserror::Error, Debug)]
pub struct ConnectionError {
    pub address: String,
    pub error: tonic::transport::Error,
}

impl std::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not establish connection to {},", self.address)?;
        if let Some(source) = self.error.source() {
            write!(f, " {source}")
        } else {
            write!(f, " {}", self.error)
        }
    }
}

pub fn uri_from_addr(address: &Address, tls: bool) -> Result<Uri, http::Error> {
    let scheme = if tls { Scheme::HTTPS } else { Scheme::HTTP };

    Uri::builder()
        .scheme(scheme)
        .authority(address.as_str())
        .path_and_query(PathAndQuery::from_static("/"))
        .build()
}

/// Dials `address`. The timeout bounds both the connection attempt and every
/// request sent over the returned channel.
pub async fn connect(address: &Address, tls: bool, timeout: Duration) -> anyhow::Result<Channel> {
    let uri = uri_from_addr(address, tls)?;
    let to_err = |error| ConnectionError {
        address: address.to_string(),
        error,
    };

    let mut endpoint = Channel::builder(uri)
        .connect_timeout(timeout)
        .timeout(timeout);
    if tls {
        endpoint = endpoint.tls_config(ClientTlsConfig::new()).map_err(to_err)?;
    }
    let channel = endpoint.connect().await.map_err(to_err)?;

    Ok(channel)
}
