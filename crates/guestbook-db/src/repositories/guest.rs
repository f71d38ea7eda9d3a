//! PostgreSQL implementation of GuestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guestbook_core::{GuestEntry, GuestRepository, NewGuestEntry, RepoResult};

use crate::models::GuestModel;

use super::error::map_db_error;

/// PostgreSQL implementation of GuestRepository
#[derive(Clone)]
pub struct PgGuestRepository {
    pool: PgPool,
}

impl PgGuestRepository {
    /// Create a new PgGuestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for PgGuestRepository {
    #[instrument(skip(self))]
    async fn insert(&self, entry: &NewGuestEntry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO guests (name, message)
            VALUES ($1, $2)
            "#,
        )
        .bind(&entry.name)
        .bind(&entry.message)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<GuestEntry>> {
        let results = sqlx::query_as::<_, GuestModel>(
            r#"
            SELECT id, name, message
            FROM guests
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GuestEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM guests")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }
}
