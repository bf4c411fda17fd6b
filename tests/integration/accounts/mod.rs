//! Registration, login and auth guard integration tests

use axum::http::StatusCode;
use serde_json::json;
use smgpub_accounts::UserStore;
use smgpub_auth::{AuthBackend, AuthConfig};

use crate::common::TestApp;

mod test_credentials {
    use super::*;

    #[tokio::test]
    async fn test_register_and_login_resolve_to_same_user() {
        let app = TestApp::new();

        let t1 = app.register("a@x.com", "pw").await;
        let (status, body) = app
            .post_json(
                "/api/auth/login",
                None,
                json!({"email": "a@x.com", "password": "pw"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let t2 = body["token"].as_str().unwrap();

        let first = app.auth.authenticate(&t1).unwrap();
        let second = app.auth.authenticate(t2).unwrap();
        assert_eq!(first.user_id, second.user_id);

        let stored = app.users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored.id, first.user_id);
        assert!(stored.membership.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_rejected() {
        let app = TestApp::new();
        app.register("a@x.com", "pw").await;

        let (status, body) = app
            .post_json(
                "/api/auth/register",
                None,
                json!({"email": "a@x.com", "password": "other"}),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "DUPLICATE_EMAIL");
        assert_eq!(app.users.len(), 1);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let app = TestApp::new();
        app.register("a@x.com", "pw").await;

        let wrong = app
            .post_json(
                "/api/auth/login",
                None,
                json!({"email": "a@x.com", "password": "wrong"}),
            )
            .await;
        let unknown = app
            .post_json(
                "/api/auth/login",
                None,
                json!({"email": "nobody@x.com", "password": "pw"}),
            )
            .await;

        assert_eq!(wrong.0, StatusCode::BAD_REQUEST);
        assert_eq!(wrong, unknown);
        assert!(wrong.1.get("token").is_none());
    }

    #[tokio::test]
    async fn test_concurrent_registrations_admit_exactly_one() {
        let app = std::sync::Arc::new(TestApp::new());

        let handles: Vec<_> = (0..6)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    app.post_json(
                        "/api/auth/register",
                        None,
                        json!({"email": "race@x.com", "password": format!("pw{i}")}),
                    )
                    .await
                    .0
                })
            })
            .collect();

        let mut statuses = Vec::new();
        for handle in handles {
            statuses.push(handle.await.unwrap());
        }

        assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
        assert_eq!(
            statuses
                .iter()
                .filter(|s| **s == StatusCode::BAD_REQUEST)
                .count(),
            5
        );
        assert_eq!(app.users.len(), 1);
    }
}

mod test_auth_guard {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let app = TestApp::new();
        let (status, body) = app.get_json("/api/analytics/revenue", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"]["code"].is_string());
    }

    #[tokio::test]
    async fn test_tampered_token_is_401() {
        let app = TestApp::new();
        let token = app.register("a@x.com", "pw").await;
        let tampered = format!("{}x", token);

        let (status, _) = app.get_json("/api/analytics/revenue", Some(&tampered)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_401() {
        let app = TestApp::new();
        let foreign = AuthBackend::new(
            AuthConfig::new("some-other-secret", chrono::Duration::hours(1))
                .with_issuer("smgpub-test"),
        )
        .issue(uuid::Uuid::new_v4())
        .unwrap()
        .token;

        let (status, _) = app.get_json("/api/analytics/revenue", Some(&foreign)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token_is_401() {
        let app = TestApp::new();
        let expired = AuthBackend::new(
            AuthConfig::new(crate::common::JWT_SECRET, chrono::Duration::hours(-2))
                .with_issuer("smgpub-test"),
        )
        .issue(uuid::Uuid::new_v4())
        .unwrap()
        .token;

        let (status, body) = app.get_json("/api/analytics/revenue", Some(&expired)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "EXPIRED_TOKEN");
    }

    #[tokio::test]
    async fn test_public_routes_need_no_token() {
        let app = TestApp::new();

        let (status, body) = app.get_json("/api/beats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, _) = app
            .send(
                axum::http::Request::get("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}
