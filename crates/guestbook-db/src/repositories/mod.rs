//! PostgreSQL repository implementations

mod error;
mod guest;

pub use error::map_db_error;
pub use guest::PgGuestRepository;
