//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_unique_violation;

/// Row shape shared by every `SELECT`/`RETURNING` below.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.code, r.long_url, r.created_at, r.clicks)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Code uniqueness comes from the `UNIQUE` constraint on `links.code`, and
/// click counting from a single `UPDATE ... RETURNING` statement, so neither
/// needs a lock held by the application.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn exists(&self, code: &str) -> Result<bool, LinkError> {
        let found: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE code = ?)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(found)
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, long_url, created_at, clicks)
            VALUES (?, ?, ?, 0)
            RETURNING id, code, long_url, created_at, clicks
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                LinkError::already_exists(&new_link.code)
            } else {
                LinkError::Storage(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find(&self, code: &str) -> Result<Option<Link>, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, long_url, created_at, clicks
            FROM links
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Link, LinkError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE code = ?
            RETURNING id, code, long_url, created_at, clicks
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::from).ok_or_else(|| LinkError::not_found(code))
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Link>, LinkError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, long_url, created_at, clicks
            FROM links
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, LinkError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
