//! Guest database model

use sqlx::FromRow;

/// Database model for the guests table
///
/// The table is assumed pre-existing: `guests(id, name, message)` with a
/// storage-generated id. No migration logic lives in this crate.
#[derive(Debug, Clone, FromRow)]
pub struct GuestModel {
    pub id: i64,
    pub name: String,
    pub message: String,
}
