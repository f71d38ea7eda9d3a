//! # guestbook-web
//!
//! Guestbook web server built with the Axum framework.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
