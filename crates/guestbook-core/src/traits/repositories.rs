//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{GuestEntry, NewGuestEntry};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Data access for guest entries
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Persist a new guest entry; the id is assigned by storage
    async fn insert(&self, entry: &NewGuestEntry) -> RepoResult<()>;

    /// List all entries ordered by id descending (most recent first)
    async fn list_all(&self) -> RepoResult<Vec<GuestEntry>>;

    /// Count all entries
    async fn count(&self) -> RepoResult<i64>;
}
