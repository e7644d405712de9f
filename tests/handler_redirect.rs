mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use quicklink::routes::router;

#[tokio::test]
async fn test_redirect_success() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "abc123", "https://example.com/landing").await;

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/landing");
    assert_eq!(common::clicks_of(&db.pool, "abc123").await, 1);
}

#[tokio::test]
async fn test_redirect_counts_each_visit() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "multi", "https://example.com").await;

    for _ in 0..3 {
        server.get("/multi").await.assert_status(StatusCode::FOUND);
    }

    assert_eq!(common::clicks_of(&db.pool, "multi").await, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "other", "https://example.com").await;

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    let body = response.text();
    assert!(body.contains("Short code not found."));
    assert!(body.contains("<form method=\"post\" action=\"/\">"));
    assert!(response.maybe_header("location").is_none());

    assert_eq!(common::clicks_of(&db.pool, "other").await, 0);
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "MixedCase", "https://example.com").await;

    server.get("/mixedcase").await.assert_status_not_found();
    server.get("/MixedCase").await.assert_status(StatusCode::FOUND);
}
