//! Route definitions
//!
//! One page route with GET/POST semantics, plus health probes.

use axum::{routing::get, Router};

use crate::handlers::{guestbook, health};
use crate::state::AppState;

/// Create the main router with the guestbook page route
pub fn create_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(guestbook::show_entries).post(guestbook::sign_guestbook),
    )
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
