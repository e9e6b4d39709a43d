//! Gateway configuration.
//!
//! Everything has a working default; environment variables override.

use std::net::SocketAddr;

use crate::upstream::{DEFAULT_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL, UpstreamConfig};

/// Environment variable overriding the upstream URL.
pub const ENV_UPSTREAM_URL: &str = "MRT_UPSTREAM_URL";
/// Environment variable overriding the listen address.
pub const ENV_BIND_ADDR: &str = "MRT_BIND_ADDR";
/// Environment variable overriding the upstream timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "MRT_UPSTREAM_TIMEOUT_SECS";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the gateway process.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// URL of the upstream station document
    pub upstream_url: String,

    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_UPSTREAM_URL) {
            config.upstream_url = url;
        }

        if let Some(addr) = get(ENV_BIND_ADDR) {
            config.bind_addr = addr.trim().parse().map_err(|_| ConfigError::Invalid {
                var: ENV_BIND_ADDR,
                value: addr.clone(),
            })?;
        }

        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            config.timeout_secs = secs
                .trim()
                .parse()
                .ok()
                .filter(|&n: &u64| n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: ENV_TIMEOUT_SECS,
                    value: secs.clone(),
                })?;
        }

        Ok(config)
    }

    /// Set the upstream URL.
    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the upstream timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Upstream client configuration derived from this config.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::new(&self.upstream_url).with_timeout(self.timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
