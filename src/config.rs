//! Host configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "counsel=info,tower_http=info";

/// Errors raised while starting the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A configuration value could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos site root holding `pkg/` and public assets.
    pub site_root: Option<PathBuf>,
    pub log_filter: String,
}

impl HostConfig {
    /// Read `PORT`, `COUNSEL_SITE_ROOT` and `RUST_LOG`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("COUNSEL_SITE_ROOT").ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns an error if `port` is not a valid port number.
    pub fn from_vars(port: Option<&str>, site_root: Option<&str>, log_filter: Option<&str>) -> Result<Self, HostError> {
        let port = parse_port(port)?;
        let site_root = site_root.map(str::trim).filter(|s| !s.is_empty()).map(PathBuf::from);
        let log_filter = log_filter
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_owned();
        Ok(Self { port, site_root, log_filter })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| HostError::InvalidVar { var: "PORT", value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
