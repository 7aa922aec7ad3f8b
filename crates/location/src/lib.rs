//! # Location Resolver
//!
//! Acquires a best-effort geographic fix from the host device, first with a
//! precise, fresh-fix request and then, if that fails for any reason, with a
//! degraded request that tolerates lower accuracy and a recent cached fix.

mod error;
mod resolver;

pub use self::error::LocationError;
pub use self::resolver::*;

/// Result type for location requests.
pub type Result<T> = std::result::Result<T, LocationError>;
