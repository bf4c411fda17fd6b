//! Common test utilities and fixtures for integration tests
//!
//! Builds the composed application over in-memory stores, a recording
//! checkout mock and a temporary upload directory.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use smgpub_accounts::{CredentialService, MemoryUserStore};
use smgpub_app::{build_router, AppServices};
use smgpub_auth::{AuthBackend, AuthConfig};
use smgpub_billing::MemoryTransactionStore;
use smgpub_catalog::{MemoryBeatStore, UploadStorage};
use smgpub_checkout::{mock::MockCheckoutService, SubscriptionPlan};
use smgpub_common::PasswordHasher;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const BOUNDARY: &str = "smgpub-integration-boundary";

pub struct TestApp {
    pub router: Router,
    pub auth: AuthBackend,
    pub users: MemoryUserStore,
    pub beats: MemoryBeatStore,
    pub transactions: MemoryTransactionStore,
    pub checkout: MockCheckoutService,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let upload_dir = tempfile::tempdir().unwrap();
        let auth = AuthBackend::new(
            AuthConfig::new(JWT_SECRET, chrono::Duration::hours(1)).with_issuer("smgpub-test"),
        );
        let users = MemoryUserStore::new();
        let beats = MemoryBeatStore::new();
        let transactions = MemoryTransactionStore::new();
        let checkout = MockCheckoutService::new();

        let services = AppServices {
            auth: auth.clone(),
            credentials: CredentialService::new(
                Arc::new(users.clone()),
                PasswordHasher::with_cost(1024, 1).unwrap(),
            ),
            beats: Arc::new(beats.clone()),
            storage: UploadStorage::new(upload_dir.path().join("uploads")),
            transactions: Arc::new(transactions.clone()),
            checkout: Arc::new(checkout.clone()),
            plan: SubscriptionPlan::new("price_integration", "http://localhost:5173"),
            max_upload_bytes: 1024 * 1024,
        };

        Self {
            router: build_router(services),
            auth,
            users,
            beats,
            transactions,
            checkout,
            upload_dir,
        }
    }

    pub fn uploads_path(&self) -> std::path::PathBuf {
        self.upload_dir.path().join("uploads")
    }

    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.uploads_path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(request).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn post_json(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send_json(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get_json(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::get(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send_json(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_multipart(
        &self,
        uri: &str,
        token: Option<&str>,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send_json(builder.body(Body::from(multipart_body(fields, file))).unwrap())
            .await
    }

    /// Register a user and return its token
    pub async fn register(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post_json(
                "/api/auth/register",
                None,
                serde_json::json!({"email": email, "password": password}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: audio/mpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
