//! HTTP handlers for emotion endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::adapters::http::error_response::{
    json_rejection, query_rejection, status_for, ErrorResponse,
};
use crate::application::handlers::emotion::{
    DeleteEmotionCommand, DeleteEmotionHandler, GetEmotionStatsHandler, GetEmotionStatsQuery,
    ListEmotionsHandler, ListEmotionsQuery, LogEmotionCommand, LogEmotionHandler,
};
use crate::domain::emotion::{EmotionError, EmotionKind};
use crate::domain::foundation::{EmotionRecordId, UserId};

use super::dto::{
    EmotionResponse, EmotionStatsResponse, ListEmotionsParams, LogEmotionRequest, StatsParams,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct EmotionHandlers {
    log_handler: Arc<LogEmotionHandler>,
    list_handler: Arc<ListEmotionsHandler>,
    delete_handler: Arc<DeleteEmotionHandler>,
    stats_handler: Arc<GetEmotionStatsHandler>,
}

impl EmotionHandlers {
    pub fn new(
        log_handler: Arc<LogEmotionHandler>,
        list_handler: Arc<ListEmotionsHandler>,
        delete_handler: Arc<DeleteEmotionHandler>,
        stats_handler: Arc<GetEmotionStatsHandler>,
    ) -> Self {
        Self {
            log_handler,
            list_handler,
            delete_handler,
            stats_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/emotions - Log an emotion
pub async fn log_emotion(
    State(handlers): State<EmotionHandlers>,
    payload: Result<Json<LogEmotionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let cmd = LogEmotionCommand {
        user_id: req.user_id.unwrap_or_default(),
        emotion: req.emotion.unwrap_or_default(),
        intensity: req.intensity,
        note: req.note,
        date: req.date,
    };

    match handlers.log_handler.handle(cmd, Utc::now().date_naive()).await {
        Ok(record) => (StatusCode::CREATED, Json(EmotionResponse::from(&record))).into_response(),
        Err(e) => handle_emotion_error(e),
    }
}

/// GET /api/emotions/:user_id - History, newest first
pub async fn list_emotions(
    State(handlers): State<EmotionHandlers>,
    Path(user_id): Path<String>,
    params: Result<Query<ListEmotionsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_emotion_error(e.into()),
    };
    let kind = match params.kind.as_deref().map(str::parse::<EmotionKind>).transpose() {
        Ok(kind) => kind,
        Err(e) => return handle_emotion_error(e.into()),
    };

    match handlers
        .list_handler
        .handle(ListEmotionsQuery { user_id, kind })
        .await
    {
        Ok(records) => {
            let body: Vec<EmotionResponse> = records.iter().map(EmotionResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_emotion_error(e),
    }
}

/// GET /api/emotions/:user_id/stats - Statistics snapshot
pub async fn emotion_stats(
    State(handlers): State<EmotionHandlers>,
    Path(user_id): Path<String>,
    params: Result<Query<StatsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection(rejection),
    };

    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_emotion_error(e.into()),
    };

    let query = GetEmotionStatsQuery {
        user_id,
        today: params.today.unwrap_or_else(|| Utc::now().date_naive()),
    };

    match handlers.stats_handler.handle(query).await {
        Ok(stats) => (StatusCode::OK, Json(EmotionStatsResponse::from(stats))).into_response(),
        Err(e) => handle_emotion_error(e),
    }
}

/// DELETE /api/emotions/:user_id/entries/:id - Delete one entry
///
/// Absent ids succeed with 204 like present ones.
pub async fn delete_emotion(
    State(handlers): State<EmotionHandlers>,
    Path((user_id, record_id)): Path<(String, String)>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_emotion_error(e.into()),
    };
    let record_id = match record_id.parse::<EmotionRecordId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::validation("id", "Invalid emotion record ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    match handlers
        .delete_handler
        .handle(DeleteEmotionCommand { user_id, record_id })
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_emotion_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_emotion_error(error: EmotionError) -> Response {
    let status = status_for(error.code());
    let body = match &error {
        EmotionError::ValidationFailed { field, message } => {
            ErrorResponse::validation(field, message.clone())
        }
        EmotionError::StorageUnavailable(msg) => {
            tracing::error!(error = %msg, "Emotion storage unavailable");
            ErrorResponse::storage_unavailable("Storage is temporarily unavailable")
        }
        EmotionError::NotFound(_) | EmotionError::Forbidden => {
            ErrorResponse::new(error.code(), error.message())
        }
    };
    body.into_response_with(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failed_maps_to_400() {
        let response = handle_emotion_error(EmotionError::validation("emotion", "unknown"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = handle_emotion_error(EmotionError::forbidden());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_emotion_error(EmotionError::not_found(EmotionRecordId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_unavailable_maps_to_503() {
        let response = handle_emotion_error(EmotionError::storage_unavailable("down"));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
