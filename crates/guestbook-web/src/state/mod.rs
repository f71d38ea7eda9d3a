//! Application state
//!
//! Holds the shared state for the Axum application: the guest repository,
//! the connection pool handle, and configuration.

use std::sync::Arc;

use guestbook_common::AppConfig;
use guestbook_core::GuestRepository;
use guestbook_db::PgPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Guest entry repository
    repo: Arc<dyn GuestRepository>,
    /// Connection pool handle, kept for readiness checks
    pool: PgPool,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(repo: Arc<dyn GuestRepository>, pool: PgPool, config: AppConfig) -> Self {
        Self {
            repo,
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the guest repository
    pub fn repo(&self) -> &dyn GuestRepository {
        self.repo.as_ref()
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("repo", &"GuestRepository")
            .field("config", &"AppConfig")
            .finish()
    }
}
