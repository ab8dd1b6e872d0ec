//! axum router for running the webhook as a standalone HTTP server.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use super::handler::Dispatcher;
use super::signature::SIGNATURE_HEADER;

/// Builds the router: `POST /callback` for webhook deliveries and
/// `GET /health` for liveness checks.
pub fn create_router(dispatcher: Dispatcher) -> Router {
    Router::new()
        .route("/callback", post(callback))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

async fn callback(
    State(dispatcher): State<Dispatcher>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    let response = dispatcher.handle_webhook(signature, &body).await;
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, response.body)
}

async fn health() -> &'static str {
    "OK"
}
