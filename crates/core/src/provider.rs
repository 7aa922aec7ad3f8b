//! # Provider
//!
//! Provider defines external data interfaces for the check-in crates.

use anyhow::Result;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::{Request, Response};

/// The `HttpRequest` trait defines the behavior for making outbound HTTP calls.
///
/// Implementations return the upstream response as-is: a non-success status
/// is a valid response, not an error. Only transport-level failures
/// (connection refused, DNS, TLS) are reported as `Err`.
pub trait HttpRequest: Send + Sync {
    /// Make outbound HTTP request.
    fn fetch(&self, request: Request<Bytes>) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

/// The `Clock` trait supplies wall-clock time.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
