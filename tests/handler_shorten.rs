mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use snaplink::api::handlers::shorten_handler;

fn shorten_app() -> (TestServer, std::sync::Arc<snaplink::infrastructure::memory::ShortUrlStore>) {
    let (state, store, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);
    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_shorten_success() {
    let (server, _store) = shorten_app();

    let response = server
        .post("/shorturls")
        .json(&json!({
            "url": "https://example.com/some/long/path",
            "validity": 30
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let short_link = json["shortLink"].as_str().unwrap();
    assert!(short_link.starts_with("http://localhost:3001/"));

    let code = short_link.rsplit('/').next().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let expiry: DateTime<Utc> = json["expiry"].as_str().unwrap().parse().unwrap();
    assert_eq!(expiry, common::test_epoch() + Duration::minutes(30));
}

#[tokio::test]
async fn test_shorten_default_validity_is_30_minutes() {
    let (server, _store) = shorten_app();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["expiry"], "2025-06-01T12:30:00Z");
}

#[tokio::test]
async fn test_shorten_with_custom_shortcode() {
    let (server, store) = shorten_app();

    let response = server
        .post("/shorturls")
        .json(&json!({
            "url": "https://example.com",
            "shortcode": "promo2025"
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortLink"], "http://localhost:3001/promo2025");

    let record = store.resolve("promo2025", common::test_epoch()).unwrap();
    assert_eq!(record.original_url, "https://example.com");
}

#[tokio::test]
async fn test_shorten_empty_shortcode_is_generated() {
    let (server, _store) = shorten_app();

    let response = server
        .post("/shorturls")
        .json(&json!({
            "url": "https://example.com",
            "shortcode": ""
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let code = json["shortLink"].as_str().unwrap().rsplit('/').next().unwrap().to_string();
    assert_eq!(code.len(), 6);
}

#[tokio::test]
async fn test_shorten_custom_code_conflict() {
    let (server, _store) = shorten_app();

    server
        .post("/shorturls")
        .json(&json!({
            "url": "https://first.example",
            "shortcode": "taken1"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/shorturls")
        .json(&json!({
            "url": "https://second.example",
            "shortcode": "taken1"
        }))
        .await;

    assert_eq!(response.status_code(), 409);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Shortcode already exists");
}

#[tokio::test]
async fn test_shorten_conflict_even_when_existing_is_expired() {
    let (state, store, _rx) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    common::seed_expired_short_url(&store, "bygone", "https://old.example");

    let response = server
        .post("/shorturls")
        .json(&json!({
            "url": "https://new.example",
            "shortcode": "bygone"
        }))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (server, _store) = shorten_app();

    let response = server.post("/shorturls").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
    assert_eq!(json["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, _store) = shorten_app();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
    assert_eq!(json["error"]["message"], "Invalid URL format");
}

#[tokio::test]
async fn test_shorten_zero_validity() {
    let (server, _store) = shorten_app();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 0 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_validity");
    assert_eq!(json["error"]["message"], "Validity must be a positive number");
}

#[tokio::test]
async fn test_shorten_negative_validity() {
    let (server, _store) = shorten_app();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": -10 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_validity");
}

#[tokio::test]
async fn test_shorten_non_numeric_validity_is_bad_request() {
    let (server, _store) = shorten_app();

    // Deserialization failures use the 400 envelope, not axum's plain 422.
    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": "thirty" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_malformed_body_is_bad_request() {
    let (server, _store) = shorten_app();

    let response = server
        .post("/shorturls")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_two_urls_get_distinct_codes() {
    let (server, _store) = shorten_app();

    let first = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();

    // Same original URL still yields two independent mappings.
    assert_ne!(first["shortLink"], second["shortLink"]);
}
