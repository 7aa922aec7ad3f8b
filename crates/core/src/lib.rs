//! # Check-in Core
//!
//! Wire types and provider interfaces shared by the check-in submitter and
//! the relay.

mod error;
mod payload;
mod provider;

pub use crate::error::*;
pub use crate::payload::*;
pub use crate::provider::*;
