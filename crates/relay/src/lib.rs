//! # Check-in Relay
//!
//! Validates check-ins received from drivers and forwards them to the
//! upstream fleet-tracking API, passing the caller's `Authorization` header
//! through untouched.

mod config;
mod error;
mod handler;

pub use self::config::RelayConfig;
pub use self::error::RelayError;
pub use self::handler::*;

/// Result type for the relay.
pub type Result<T> = anyhow::Result<T, RelayError>;
