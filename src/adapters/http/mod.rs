//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`api_router`] composes them with the health probe and the shared
//! middleware stack (CORS, request tracing, timeouts).

pub mod emotion;
pub mod error_response;
pub mod user;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::emotion::{
    DeleteEmotionHandler, GetEmotionStatsHandler, ListEmotionsHandler, LogEmotionHandler,
};
use crate::application::handlers::user::{
    GetUserHandler, ListUsersHandler, RegisterUserHandler, UpdateProfileHandler,
};
use crate::config::ServerConfig;
use crate::ports::{EmotionRepository, UserRepository};

pub use emotion::{emotion_routes, EmotionHandlers};
pub use error_response::ErrorResponse;
pub use user::{user_routes, UserHandlers};

/// Build the full application router over the given stores.
pub fn api_router(
    emotions: Arc<dyn EmotionRepository>,
    users: Arc<dyn UserRepository>,
    server: &ServerConfig,
) -> Router {
    let emotion_handlers = EmotionHandlers::new(
        Arc::new(LogEmotionHandler::new(emotions.clone())),
        Arc::new(ListEmotionsHandler::new(emotions.clone())),
        Arc::new(DeleteEmotionHandler::new(emotions.clone())),
        Arc::new(GetEmotionStatsHandler::new(emotions)),
    );
    let user_handlers = UserHandlers::new(
        Arc::new(RegisterUserHandler::new(users.clone())),
        Arc::new(GetUserHandler::new(users.clone())),
        Arc::new(ListUsersHandler::new(users.clone())),
        Arc::new(UpdateProfileHandler::new(users)),
    );

    Router::new()
        .route("/health", get(health))
        .merge(emotion_routes(emotion_handlers))
        .merge(user_routes(user_handlers))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}
