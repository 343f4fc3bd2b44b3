//! Integration tests for the emotion journal over HTTP.
//!
//! Drives the full router (handlers, stores, middleware) against the
//! in-memory adapters.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use metanoia::adapters::http::api_router;
use metanoia::adapters::memory::{InMemoryEmotionRepository, InMemoryUserRepository};
use metanoia::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    emotions: Arc<InMemoryEmotionRepository>,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let emotions = Arc::new(InMemoryEmotionRepository::new());
        let router = api_router(
            emotions.clone(),
            Arc::new(InMemoryUserRepository::new()),
            &ServerConfig::default(),
        );
        Self { emotions, router }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn post(&self, uri: &str, body: Value) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn delete(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn log(&self, user: &str, emotion: &str, date: &str) -> Value {
        let response = self
            .post(
                "/api/emotions",
                json!({ "userId": user, "emotion": emotion, "date": date }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body(response).await
    }
}

async fn body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn histories_are_scoped_per_user_and_stats_pick_dominant_kind() {
    let app = TestApp::new();
    for (emotion, date) in [
        ("happy", "2024-09-10"),
        ("sad", "2024-09-11"),
        ("happy", "2024-09-12"),
        ("sad", "2024-09-13"),
        ("happy", "2024-09-14"),
    ] {
        app.log("user-a", emotion, date).await;
    }
    app.log("user-b", "happy", "2024-09-14").await;

    let list_a = body(app.get("/api/emotions/user-a").await).await;
    let list_b = body(app.get("/api/emotions/user-b").await).await;
    assert_eq!(list_a.as_array().unwrap().len(), 5);
    assert_eq!(list_b.as_array().unwrap().len(), 1);
    assert_eq!(list_a[0]["date"], "2024-09-14");
    assert_eq!(list_a[4]["date"], "2024-09-10");

    let stats = body(app.get("/api/emotions/user-a/stats?today=2024-09-14").await).await;
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["mostFrequent"], "happy");
    assert_eq!(stats["byKind"]["happy"], 3);
    assert_eq!(stats["byKind"]["sad"], 2);
    assert_eq!(stats["thisWeek"], 5);
    assert_eq!(stats["currentStreak"], 5);
}

#[tokio::test]
async fn created_record_round_trips_through_list() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/emotions",
            json!({
                "userId": "u1",
                "emotion": "grateful",
                "note": "  dinner with friends ",
                "intensity": 8,
                "date": "2024-02-29"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body(response).await;

    let listed = body(app.get("/api/emotions/u1").await).await;
    assert_eq!(listed, json!([created.clone()]));
    assert_eq!(created["note"], "  dinner with friends ");
    assert_eq!(created["stars"], "★★★★★★★★☆☆");
}

#[tokio::test]
async fn notes_are_stored_exactly_as_sent() {
    let app = TestApp::new();
    let long = "n".repeat(2001);

    for note in ["", "  two spaces  ", long.as_str()] {
        let response = app
            .post(
                "/api/emotions",
                json!({ "userId": "notes", "emotion": "calm", "note": note }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body(response).await;
        assert_eq!(created["note"], note);
    }

    let missing = body(
        app.post("/api/emotions", json!({ "userId": "notes", "emotion": "calm" }))
            .await,
    )
    .await;
    assert_eq!(missing["note"], Value::Null);

    let listed = body(app.get("/api/emotions/notes").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn deleted_record_never_reappears_and_repeat_delete_is_204() {
    let app = TestApp::new();
    let keep = app.log("u1", "calm", "2024-05-01").await;
    let gone = app.log("u1", "angry", "2024-05-02").await;
    let uri = format!("/api/emotions/u1/entries/{}", gone["id"].as_str().unwrap());

    assert_eq!(app.delete(&uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.delete(&uri).await.status(), StatusCode::NO_CONTENT);

    let listed = body(app.get("/api/emotions/u1").await).await;
    assert_eq!(listed, json!([keep]));
}

#[tokio::test]
async fn deleting_someone_elses_record_is_forbidden() {
    let app = TestApp::new();
    let record = app.log("owner", "sad", "2024-05-01").await;

    let response = app
        .delete(&format!(
            "/api/emotions/intruder/entries/{}",
            record["id"].as_str().unwrap()
        ))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.emotions.len().await, 1);
}

#[tokio::test]
async fn every_intensity_in_range_is_accepted_and_others_rejected() {
    let app = TestApp::new();

    for intensity in 1..=10 {
        let response = app
            .post(
                "/api/emotions",
                json!({ "userId": "u1", "emotion": "excited", "intensity": intensity }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED, "intensity {intensity}");
    }
    for intensity in [-1, 0, 11, 100] {
        let response = app
            .post(
                "/api/emotions",
                json!({ "userId": "u1", "emotion": "excited", "intensity": intensity }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "intensity {intensity}");
        assert_eq!(body(response).await["code"], "VALIDATION_FAILED");
    }

    assert_eq!(app.emotions.len().await, 10);
}

#[tokio::test]
async fn kind_filter_narrows_history() {
    let app = TestApp::new();
    app.log("u1", "tired", "2024-01-01").await;
    app.log("u1", "happy", "2024-01-02").await;
    app.log("u1", "tired", "2024-01-03").await;

    let tired = body(app.get("/api/emotions/u1?kind=tired").await).await;

    assert_eq!(tired.as_array().unwrap().len(), 2);
    assert!(tired
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["emotion"] == "tired"));
}

#[tokio::test]
async fn empty_user_stats_report_none() {
    let app = TestApp::new();

    let stats = body(app.get("/api/emotions/newcomer/stats?today=2024-01-01").await).await;

    assert_eq!(stats["total"], 0);
    assert_eq!(stats["mostFrequent"], "none");
    assert_eq!(stats["consistency"], 0);
    assert_eq!(stats["byKind"], json!({}));
}

#[tokio::test]
async fn storage_outage_surfaces_as_503() {
    let app = TestApp::new();
    app.emotions.set_available(false);

    let response = app
        .post("/api/emotions", json!({ "userId": "u1", "emotion": "anxious" }))
        .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
