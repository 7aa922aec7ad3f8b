use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use checkin_relay::RelayConfig;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub relay: RelayConfig,
}

impl Config {
    /// Build configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when `LISTEN_ADDR` is not a socket address.
    pub fn from_env() -> Result<Self> {
        let listen_addr = get_listen_addr();
        let listen_addr =
            listen_addr.parse().with_context(|| format!("invalid LISTEN_ADDR `{listen_addr}`"))?;

        Ok(Self { listen_addr, relay: RelayConfig::from_env() })
    }
}

pub fn get_listen_addr() -> String {
    env::var("LISTEN_ADDR").unwrap_or_else(|_| {
        let default = "0.0.0.0:3000".to_string();
        tracing::trace!("LISTEN_ADDR not set, using default: {default}");
        default
    })
}
