//! Repository traits (ports)

mod repositories;

pub use repositories::{GuestRepository, RepoResult};
