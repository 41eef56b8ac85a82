mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use shorturl::api::handlers::{redirect_handler, shorten_handler};
use shorturl::state::AppState;

fn redirect_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{short_url}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state();
    common::create_test_record(repo.as_ref(), "https://www.freecodecamp.org").await;

    let server = redirect_server(state);

    let response = server.get("/api/shorturl/1").await;

    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://www.freecodecamp.org");
}

#[tokio::test]
async fn test_register_then_redirect() {
    let (state, _repo) = common::create_test_state();
    let server = redirect_server(state);

    server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com")])
        .await;
    let json = server
        .post("/api/shorturl")
        .form(&[("url", "https://rust-lang.org/learn")])
        .await
        .json::<Value>();
    assert_eq!(json["short_url"], 2);

    let response = server.get("/api/shorturl/2").await;

    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://rust-lang.org/learn");
}

#[tokio::test]
async fn test_redirect_leading_zero_code() {
    let (state, repo) = common::create_test_state();
    common::create_test_record(repo.as_ref(), "https://example.com").await;

    let server = redirect_server(state);

    let response = server.get("/api/shorturl/01").await;

    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, repo) = common::create_test_state();
    common::create_test_record(repo.as_ref(), "https://example.com").await;

    let server = redirect_server(state);

    let response = server.get("/api/shorturl/9999").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "short url not found" })
    );
}

#[tokio::test]
async fn test_redirect_non_numeric_codes() {
    let (state, _repo) = common::create_test_state();
    let server = redirect_server(state);

    for code in ["abc", "0", "-1", "1.5", "99999999999999999999"] {
        let response = server.get(&format!("/api/shorturl/{code}")).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "short url not found" }),
            "{code}"
        );
    }
}

#[tokio::test]
async fn test_redirect_non_numeric_code_skips_failing_store() {
    let server = redirect_server(common::create_failing_state());

    let response = server.get("/api/shorturl/abc").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "short url not found" })
    );
}

#[tokio::test]
async fn test_redirect_storage_failure() {
    let server = redirect_server(common::create_failing_state());

    let response = server.get("/api/shorturl/1").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "internal server error" })
    );
}
