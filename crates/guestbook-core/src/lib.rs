//! # guestbook-core
//!
//! Domain layer containing entities, errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{GuestEntry, NewGuestEntry};
pub use error::DomainError;
pub use traits::{GuestRepository, RepoResult};
