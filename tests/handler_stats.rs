mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::stats_handler;
use snaplink::state::AppState;

fn stats_app(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_shape_for_fresh_record() {
    let (state, store, _rx) = common::create_test_state();
    common::seed_short_url(&store, "abc123", "https://example.com/page", 30);
    let server = stats_app(state);

    let response = server.get("/shorturls/abc123").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortLink"], "http://localhost:3001/abc123");
    assert_eq!(json["originalUrl"], "https://example.com/page");
    assert_eq!(json["creationDate"], "2025-06-01T12:00:00Z");
    assert_eq!(json["expiry"], "2025-06-01T12:30:00Z");
    assert_eq!(json["totalClicks"], 0);
    assert!(json["clickData"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_lists_clicks_in_arrival_order() {
    let (state, store, _rx) = common::create_test_state();
    common::seed_short_url(&store, "abc123", "https://example.com", 30);

    for referrer in ["https://first.example", "https://second.example", "Direct"] {
        state
            .stats_service
            .record_click("abc123", referrer.to_string(), "10.0.0.1".parse().unwrap())
            .unwrap();
    }

    let server = stats_app(state);
    let response = server.get("/shorturls/abc123").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalClicks"], 3);

    let clicks = json["clickData"].as_array().unwrap();
    assert_eq!(clicks.len(), 3);
    assert_eq!(clicks[0]["referrer"], "https://first.example");
    assert_eq!(clicks[1]["referrer"], "https://second.example");
    assert_eq!(clicks[2]["referrer"], "Direct");

    // Every click carries a timestamp and a location tag.
    for click in clicks {
        assert!(click["timestamp"].is_string());
        assert!(click["location"].is_string());
    }
}

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _store, _rx) = common::create_test_state();
    let server = stats_app(state);

    let response = server.get("/shorturls/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Shortcode not found");
}

#[tokio::test]
async fn test_stats_expired_is_gone() {
    let (state, store, _rx) = common::create_test_state();
    common::seed_expired_short_url(&store, "bygone", "https://old.example");
    let server = stats_app(state);

    let response = server.get("/shorturls/bygone").await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "expired");
    assert_eq!(json["error"]["message"], "URL has expired");
}
