//! Subscription checkout and revenue integration tests

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use smgpub_billing::Transaction;

use crate::common::TestApp;

#[tokio::test]
async fn test_subscribe_forwards_plan_and_returns_url() {
    let app = TestApp::new();
    let token = app.register("fan@x.com", "pw").await;

    let (status, body) = app
        .post_json(
            "/api/stripe/subscribe",
            Some(&token),
            json!({"email": "fan@x.com"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["url"].as_str().unwrap().starts_with("https://"));
    assert_eq!(body.as_object().unwrap().len(), 1);

    let requests = app.checkout.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].price_id, "price_integration");
    assert_eq!(
        requests[0].cancel_url,
        "http://localhost:5173/dashboard?canceled=true"
    );
}

#[tokio::test]
async fn test_subscribe_gateway_failure_is_502() {
    let app = TestApp::new();
    let token = app.register("fan@x.com", "pw").await;
    app.checkout.set_failing(true);

    let (status, body) = app
        .post_json("/api/stripe/subscribe", Some(&token), json!({}))
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "GATEWAY_ERROR");
}

#[tokio::test]
async fn test_subscribe_rejects_malformed_email() {
    let app = TestApp::new();
    let token = app.register("fan@x.com", "pw").await;

    let (status, _) = app
        .post_json(
            "/api/stripe/subscribe",
            Some(&token),
            json!({"email": "not an email"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(app.checkout.recorded_requests().is_empty());
}

#[tokio::test]
async fn test_revenue_sums_only_callers_transactions() {
    let app = TestApp::new();
    let token = app.register("producer@x.com", "pw").await;
    let caller = app.auth.authenticate(&token).unwrap().user_id;

    app.transactions
        .record(Transaction::new(caller, Decimal::new(1999, 2)));
    app.transactions
        .record(Transaction::new(caller, Decimal::new(1, 2)));
    app.transactions
        .record(Transaction::new(uuid::Uuid::new_v4(), Decimal::new(5000, 2)));

    let (status, body) = app.get_json("/api/analytics/revenue", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revenue"], json!(20.0));
    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert!(transactions
        .iter()
        .all(|t| t["user_id"] == caller.to_string()));
}

#[tokio::test]
async fn test_revenue_with_no_transactions() {
    let app = TestApp::new();
    let token = app.register("new@x.com", "pw").await;

    let (status, body) = app.get_json("/api/analytics/revenue", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"revenue": 0.0, "transactions": []}));
}
