mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use quicklink::routes::router;

#[tokio::test]
async fn test_home_page_renders() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<form method=\"post\" action=\"/\">"));
    assert!(body.contains("No links yet."));
}

#[tokio::test]
async fn test_home_page_lists_recent_links() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "older", "https://example.com/older").await;
    common::create_test_link(&db.pool, "newer", "https://example.com/newer").await;

    let body = server.get("/").await.text();

    assert!(body.contains("http://short.test/newer"));
    assert!(body.contains("https://example.com/older"));
    let newer = body.find("https://example.com/newer").unwrap();
    let older = body.find("https://example.com/older").unwrap();
    assert!(newer < older);
}

#[tokio::test]
async fn test_home_page_shows_at_most_ten_links() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    for i in 0..12 {
        common::create_test_link(&db.pool, &format!("code{:02}", i), "https://example.com").await;
    }

    let body = server.get("/").await.text();

    assert!(body.contains(">code11<"));
    assert!(body.contains(">code02<"));
    assert!(!body.contains(">code01<"));
    assert!(!body.contains(">code00<"));
}

#[tokio::test]
async fn test_form_submission_success() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server
        .post("/")
        .form(&[("long_url", "https://example.com/form"), ("custom_code", "formed")])
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.text();
    assert!(body.contains("Success! Short URL:"));
    assert!(body.contains("http://short.test/formed"));

    server.get("/formed").await.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_form_submission_without_custom_code() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server
        .post("/")
        .form(&[("long_url", "https://example.com/gen"), ("custom_code", "")])
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(common::create_test_service(&db.pool).count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_form_submission_empty_url() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server.post("/").form(&[("long_url", "  ")]).await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Please enter a URL."));
}

#[tokio::test]
async fn test_form_submission_invalid_url() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server
        .post("/")
        .form(&[("long_url", "example.com")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Please enter a valid URL"));
}

#[tokio::test]
async fn test_form_submission_taken_code() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "taken", "https://example.com").await;

    let response = server
        .post("/")
        .form(&[("long_url", "https://example.com/other"), ("custom_code", "taken")])
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(response.text().contains("already taken"));
}
