mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use quicklink::routes::router;

#[tokio::test]
async fn test_list_links_newest_first() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "first", "https://example.com/1").await;
    common::create_test_link(&db.pool, "second", "https://example.com/2").await;
    common::create_test_link(&db.pool, "third", "https://example.com/3").await;

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let codes: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["third", "second", "first"]);
    assert_eq!(json[0]["long_url"], "https://example.com/3");
    assert_eq!(json[0]["clicks"], 0);
}

#[tokio::test]
async fn test_list_links_with_limit() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    for code in ["aaa", "bbb", "ccc"] {
        common::create_test_link(&db.pool, code, "https://example.com").await;
    }

    let response = server.get("/api/links").add_query_param("limit", 2).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["code"], "ccc");
    assert_eq!(json[1]["code"], "bbb");
}

#[tokio::test]
async fn test_list_links_empty() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!([]));
}

#[tokio::test]
async fn test_list_links_invalid_limit() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    server
        .get("/api/links")
        .add_query_param("limit", 0)
        .await
        .assert_status_bad_request();

    server
        .get("/api/links")
        .add_query_param("limit", 501)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_get_link_does_not_count_click() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "info", "https://example.com/info").await;
    server.get("/info").await;

    let response = server.get("/api/links/info").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "info");
    assert_eq!(json["long_url"], "https://example.com/info");
    assert_eq!(json["short_url"], "http://short.test/info");
    assert_eq!(json["clicks"], 1);

    server.get("/api/links/info").await;
    assert_eq!(common::clicks_of(&db.pool, "info").await, 1);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    server.get("/api/links/missing").await.assert_status_not_found();
}

#[tokio::test]
async fn test_health_endpoint() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    common::create_test_link(&db.pool, "one", "https://example.com").await;

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["links"], 1);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_endpoint_database_down() {
    let db = common::setup_db().await;
    let server = TestServer::new(router(common::create_test_state(&db.pool))).unwrap();

    db.pool.close().await;

    let response = server.get("/api/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(json["checks"]["database"].get("links").is_none());
}
