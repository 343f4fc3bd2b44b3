//! HTTP routes for emotion endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{delete_emotion, emotion_stats, list_emotions, log_emotion, EmotionHandlers};

/// Creates the emotion router with all endpoints.
pub fn emotion_routes(handlers: EmotionHandlers) -> Router {
    Router::new()
        .route("/api/emotions", post(log_emotion))
        .route("/api/emotions/:user_id", get(list_emotions))
        .route("/api/emotions/:user_id/stats", get(emotion_stats))
        .route("/api/emotions/:user_id/entries/:id", delete(delete_emotion))
        .with_state(handlers)
}
