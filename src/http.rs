use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use checkin_core::{HttpRequest, RelayReply};
use checkin_relay::{RelayConfig, RelayError, RelayRequest, relay};
use futures::FutureExt;
use serde_json::{Value, json};
use tracing::error;

/// Shared, read-only request state.
pub struct AppState<P> {
    config: Arc<RelayConfig>,
    provider: Arc<P>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self { config: Arc::clone(&self.config), provider: Arc::clone(&self.provider) }
    }
}

/// Build the proxy's HTTP routes.
pub fn router<P>(config: RelayConfig, provider: P) -> Router
where
    P: HttpRequest + 'static,
{
    let state = AppState { config: Arc::new(config), provider: Arc::new(provider) };

    Router::new()
        .route("/api/postCheckIn", post(check_in::<P>))
        .route("/health", get(health))
        .with_state(state)
}

async fn check_in<P>(
    State(state): State<AppState<P>>, headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RelayReply>, RelayError>
where
    P: HttpRequest + 'static,
{
    let body = body.map_err(|rejection| {
        let reason = format!("reading check-in request body -> {}", rejection.body_text());
        error!(monotonic_counter.relay_errors = 1, code = "internal", error = %reason);
        RelayError::Internal(reason)
    })?;

    let request = RelayRequest { body, authorization: headers.get(AUTHORIZATION).cloned() };

    // contain panics to this request
    let relayed =
        AssertUnwindSafe(relay(&state.config, request, state.provider.as_ref())).catch_unwind().await;

    match relayed {
        Ok(reply) => reply.map(Json),
        Err(_panic) => {
            error!(monotonic_counter.relay_errors = 1, code = "panic", "relay panicked");
            Err(RelayError::Internal("relay panicked".to_string()))
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
