//! Beat and upload integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use smgpub_catalog::BeatStore;

use crate::common::TestApp;

mod test_beats {
    use super::*;

    #[tokio::test]
    async fn test_create_beat_is_owned_by_caller() {
        let app = TestApp::new();
        let token = app.register("producer@x.com", "pw").await;
        let caller = app.auth.authenticate(&token).unwrap().user_id;

        let (status, beat) = app
            .post_multipart(
                "/api/beats",
                Some(&token),
                &[
                    ("title", "Night Drive"),
                    ("genre", "trap"),
                    ("bpm", "140"),
                    ("key", "F#m"),
                    ("price", "29.99"),
                ],
                Some(("night drive.mp3", &b"ID3-audio"[..])),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "{beat}");
        assert_eq!(beat["owner_id"], caller.to_string());
        assert_eq!(beat["key"], "F#m");
        assert_eq!(beat["bpm"], 140);
        assert_eq!(beat["price"], serde_json::json!(29.99));

        let file = beat["file"].as_str().unwrap();
        assert!(file.ends_with("-night_drive.mp3"));
        assert!(app.uploads_path().join(file).is_file());
    }

    #[tokio::test]
    async fn test_owner_cannot_be_spoofed() {
        let app = TestApp::new();
        let token = app.register("producer@x.com", "pw").await;
        let caller = app.auth.authenticate(&token).unwrap().user_id;
        let someone_else = uuid::Uuid::new_v4().to_string();

        let (status, beat) = app
            .post_multipart(
                "/api/beats",
                Some(&token),
                &[
                    ("title", "Loop"),
                    ("price", "5"),
                    ("owner_id", someone_else.as_str()),
                ],
                Some(("loop.wav", &b"RIFF"[..])),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(beat["owner_id"], caller.to_string());
    }

    #[tokio::test]
    async fn test_create_beat_without_file_is_400() {
        let app = TestApp::new();
        let token = app.register("producer@x.com", "pw").await;

        let (status, body) = app
            .post_multipart(
                "/api/beats",
                Some(&token),
                &[("title", "Loop"), ("price", "5")],
                None,
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(app.beats.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_beat_without_token_is_401_and_stores_nothing() {
        let app = TestApp::new();

        let (status, _) = app
            .post_multipart(
                "/api/beats",
                None,
                &[("title", "Loop"), ("price", "5")],
                Some(("loop.wav", &b"RIFF"[..])),
            )
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.stored_file_count(), 0);
        assert!(app.beats.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_outage_is_503_and_file_is_cleaned_up() {
        let app = TestApp::new();
        let token = app.register("producer@x.com", "pw").await;
        app.beats.set_unavailable(true);

        let (status, body) = app
            .post_multipart(
                "/api/beats",
                Some(&token),
                &[("title", "Loop"), ("price", "5")],
                Some(("loop.wav", &b"RIFF"[..])),
            )
            .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
        assert_eq!(app.stored_file_count(), 0);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let app = TestApp::new();
        let token = app.register("producer@x.com", "pw").await;

        for title in ["first", "second"] {
            let (status, _) = app
                .post_multipart(
                    "/api/beats",
                    Some(&token),
                    &[("title", title), ("price", "1")],
                    Some(("a.wav", &b"RIFF"[..])),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let (status, beats) = app.get_json("/api/beats", None).await;
        assert_eq!(status, StatusCode::OK);
        let titles: Vec<_> = beats
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
    }
}

mod test_uploads {
    use super::*;

    #[tokio::test]
    async fn test_upload_then_download() {
        let app = TestApp::new();
        let token = app.register("producer@x.com", "pw").await;

        let (status, body) = app
            .post_multipart(
                "/api/upload",
                Some(&token),
                &[],
                Some(("stems.zip", &b"PK-archive"[..])),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let stored = body["file"].as_str().unwrap().to_string();

        let (status, bytes) = app
            .send(
                Request::get(format!("/uploads/{stored}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"PK-archive");
    }

    #[tokio::test]
    async fn test_beat_cannot_reuse_another_users_upload() {
        let app = TestApp::new();
        let alice = app.register("alice@x.com", "pw").await;
        let bob = app.register("bob@x.com", "pw").await;

        let (status, body) = app
            .post_multipart(
                "/api/upload",
                Some(&alice),
                &[],
                Some(("alice.wav", &b"RIFF"[..])),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let stored = body["file"].as_str().unwrap().to_string();

        let (status, body) = app
            .post_multipart(
                "/api/beats",
                Some(&bob),
                &[
                    ("title", "Not mine"),
                    ("price", "10"),
                    ("file_ref", stored.as_str()),
                ],
                None,
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(app.beats.list().await.unwrap().is_empty());
        assert_eq!(app.stored_file_count(), 1);
    }

    #[tokio::test]
    async fn test_upload_requires_token() {
        let app = TestApp::new();

        let (status, _) = app
            .post_multipart(
                "/api/upload",
                None,
                &[],
                Some(("a.wav", &b"RIFF"[..])),
            )
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.stored_file_count(), 0);
    }
}
