//! # Check-in Proxy
//!
//! The trusted intermediary between drivers' devices and the upstream
//! fleet-tracking API. Receives check-ins over HTTP and relays them upstream.

pub mod config;
pub mod http;
pub mod provider;
