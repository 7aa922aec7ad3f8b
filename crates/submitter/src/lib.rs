//! # Check-in Submitter
//!
//! Client side of a check-in: plate normalization, civil timestamps and the
//! single relay call that carries a vehicle plate and GPS fix.

mod config;
mod error;
mod handler;
mod plate;
mod timestamp;

pub use self::config::SubmitterConfig;
pub use self::error::SubmissionError;
pub use self::handler::*;
pub use self::plate::*;
pub use self::timestamp::*;

/// Result type for submissions.
pub type Result<T> = std::result::Result<T, SubmissionError>;
