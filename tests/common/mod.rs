#![allow(dead_code)]

use quicklink::application::services::{AllocationPolicy, LinkService};
use quicklink::domain::entities::{Link, NewLink};
use quicklink::domain::repositories::LinkRepository;
use quicklink::infrastructure::persistence::{SqliteLinkRepository, pool};
use quicklink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const BASE_URL: &str = "http://short.test";

/// A migrated database in its own temporary directory.
///
/// The directory is removed when this value is dropped, so keep it alive
/// for the whole test.
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn setup_db() -> TestDb {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("links.db").display());

    let pool = pool::connect(&url, 8, Duration::from_secs(30)).await.unwrap();
    pool::migrate(&pool).await.unwrap();

    TestDb { pool, _dir: dir }
}

pub fn create_test_repo(pool: &SqlitePool) -> Arc<SqliteLinkRepository> {
    Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())))
}

pub fn create_test_service(pool: &SqlitePool) -> Arc<LinkService<SqliteLinkRepository>> {
    Arc::new(LinkService::new(
        create_test_repo(pool),
        AllocationPolicy::default(),
    ))
}

pub fn create_test_state(pool: &SqlitePool) -> AppState {
    AppState::new(create_test_service(pool), BASE_URL)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> Link {
    create_test_repo(pool)
        .insert(NewLink::new(code, url))
        .await
        .unwrap()
}

pub async fn clicks_of(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
