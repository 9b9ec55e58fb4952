mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use linkslug::routes::{app_router, router};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state();
    repo.insert("aB1cD2eF", "https://example.com/target");

    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/aB1cD2eF").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/doesNotExist").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found.");
}

#[tokio::test]
async fn test_redirect_malformed_slug_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/favicon.ico").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_idempotent() {
    let (state, repo) = common::create_test_state();
    repo.insert("stable12", "https://example.com/same");

    let server = TestServer::new(router(state)).unwrap();

    for _ in 0..3 {
        let response = server.get("/stable12").await;
        response.assert_status(StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.header("location"), "https://example.com/same");
    }

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.put_count(), 0);
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = TestServer::new(router(common::create_failing_state())).unwrap();

    let response = server.get("/aB1cD2eF").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Server error.");
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let (state, _repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    for long_url in [
        "https://example.com",
        "http://localhost:8080/path?query=1#frag",
        "https://EXAMPLE.COM:443/Mixed/Case",
        "ftp://files.example.com/archive.tar.gz",
    ] {
        let created = server
            .post("/shorten")
            .json(&json!({ "longUrl": long_url }))
            .await;
        created.assert_status(StatusCode::CREATED);

        let short_url = created.json::<serde_json::Value>()["shortUrl"]
            .as_str()
            .unwrap()
            .to_string();
        let slug = common::slug_of(&short_url);

        let response = server.get(&format!("/{}", slug)).await;
        response.assert_status(StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.header("location"), long_url);
    }
}

#[tokio::test]
async fn test_shorten_then_redirect_non_ascii_location_is_encoded() {
    let (state, repo) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    for (long_url, location) in [
        ("https://example.com/ä", "https://example.com/%C3%A4"),
        (
            "https://example.com/日本?q=ü",
            "https://example.com/%E6%97%A5%E6%9C%AC?q=%C3%BC",
        ),
    ] {
        let created = server
            .post("/shorten")
            .json(&json!({ "longUrl": long_url }))
            .await;
        created.assert_status(StatusCode::CREATED);

        let short_url = created.json::<serde_json::Value>()["shortUrl"]
            .as_str()
            .unwrap()
            .to_string();
        let slug = common::slug_of(&short_url);

        assert_eq!(repo.snapshot(&slug).unwrap().long_url, long_url);

        let response = server.get(&format!("/{}", slug)).await;
        response.assert_status(StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.header("location"), location);
    }
}

#[tokio::test]
async fn test_redirect_sets_cors_header() {
    let (state, repo) = common::create_test_state();
    repo.insert("corsslug", "https://example.com");

    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .get("/corsslug")
        .add_header("Origin", "https://frontend.example")
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_redirect_trailing_slash_is_trimmed() {
    let (state, repo) = common::create_test_state();
    repo.insert("slashed1", "https://example.com/slashed");

    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/slashed1/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/slashed"
    );
}
