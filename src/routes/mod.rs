//! Router assembly.

mod accounts;
mod common;

pub use accounts::account_routes;
pub use common::common_routes;

use crate::config::ServerConfig;
use crate::response::error_body;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, Router};
use tower_http::trace::TraceLayer;

async fn not_found() -> impl IntoResponse {
    error_body(StatusCode::NOT_FOUND, "Not found")
}

/// Full application: account routes, common routes, JSON 404 fallback,
/// body size limit and request tracing. The limit is applied when a handler
/// reads the body, so an oversized account body gets the same 400 envelope
/// as any other unreadable body.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(account_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
