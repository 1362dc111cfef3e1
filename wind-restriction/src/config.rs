//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the HTTP bind address.
pub const BIND_ADDR_VAR: &str = "WIND_BIND_ADDR";
/// Environment variable seeding the advisory identifier sequence.
pub const ADVISORY_SEQ_VAR: &str = "WIND_ADVISORY_SEQ_START";
/// Environment variable seeding the authority identifier sequence.
pub const AUTHORITY_SEQ_VAR: &str = "WIND_AUTHORITY_SEQ_START";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid WIND_BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid {var} {value:?}: {source}")]
    SequenceStart {
        var: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Configuration for the authority server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// First advisory (FOD) identifier to issue.
    pub advisory_seq_start: u64,

    /// First authority (BLI) identifier to issue.
    pub authority_seq_start: u64,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, advisory_seq_start: u64, authority_seq_start: u64) -> Self {
        Self {
            bind_addr,
            advisory_seq_start,
            authority_seq_start,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .parse()
                .map_err(|source| ConfigError::BindAddr { value, source })?;
        }
        if let Some(start) = parse_seq(&lookup, ADVISORY_SEQ_VAR)? {
            config.advisory_seq_start = start;
        }
        if let Some(start) = parse_seq(&lookup, AUTHORITY_SEQ_VAR)? {
            config.authority_seq_start = start;
        }

        Ok(config)
    }
}

fn parse_seq(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, ConfigError> {
    lookup(var)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|source| ConfigError::SequenceStart { var, value, source })
        })
        .transpose()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            advisory_seq_start: 1,
            authority_seq_start: 1,
        }
    }
}
