//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use client::settings::FormSettings;
use form::{Backend, DeltaGap, NumberParsing, PolicyParseError, SubmitPolicy};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR `{0}`")]
    InvalidBindAddr(String),
    #[error(transparent)]
    Policy(#[from] PolicyParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub settings: FormSettings,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `BACKEND_URL` (or `REACT_APP_BACKEND_URL`): default `http://localhost:8080`
    /// - `TAUDELTA_NUMBER_PARSING`: `strict` (default) or `lenient`
    /// - `TAUDELTA_DELTA_GAP`: `enforce` (default) or `hint`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let backend = lookup("BACKEND_URL")
            .or_else(|| lookup("REACT_APP_BACKEND_URL"))
            .map(|raw| Backend::new(&raw))
            .unwrap_or_default();
        let numbers = match lookup("TAUDELTA_NUMBER_PARSING") {
            Some(raw) => raw.parse::<NumberParsing>()?,
            None => NumberParsing::default(),
        };
        let delta_gap = match lookup("TAUDELTA_DELTA_GAP") {
            Some(raw) => raw.parse::<DeltaGap>()?,
            None => DeltaGap::default(),
        };

        Ok(Self {
            bind_addr,
            port,
            settings: FormSettings { backend, policy: SubmitPolicy { numbers, delta_gap } },
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
