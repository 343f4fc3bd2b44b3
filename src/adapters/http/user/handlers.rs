//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error_response::{json_rejection, status_for, ErrorResponse};
use crate::application::handlers::user::{
    AddGoalCommand, GetUserHandler, GetUserQuery, ListUsersHandler, RegisterUserCommand,
    RegisterUserHandler, RemoveGoalCommand, UpdateProfileCommand, UpdateProfileHandler,
};
use crate::domain::foundation::UserId;
use crate::domain::profile::UserError;

use super::dto::{AddGoalRequest, RegisterUserRequest, UpdateProfileRequest, UserResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserHandlers {
    register_handler: Arc<RegisterUserHandler>,
    get_handler: Arc<GetUserHandler>,
    list_handler: Arc<ListUsersHandler>,
    update_handler: Arc<UpdateProfileHandler>,
}

impl UserHandlers {
    pub fn new(
        register_handler: Arc<RegisterUserHandler>,
        get_handler: Arc<GetUserHandler>,
        list_handler: Arc<ListUsersHandler>,
        update_handler: Arc<UpdateProfileHandler>,
    ) -> Self {
        Self {
            register_handler,
            get_handler,
            list_handler,
            update_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /users - Register a user
pub async fn register_user(
    State(handlers): State<UserHandlers>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let Some(username) = req.username else {
        return ErrorResponse::validation("username", "Field 'username' is required")
            .into_response_with(StatusCode::BAD_REQUEST);
    };

    let cmd = RegisterUserCommand {
        username,
        email: req.email,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::CREATED, Json(UserResponse::from(&profile))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /users - List every user
pub async fn list_users(State(handlers): State<UserHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(users) => {
            let body: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_user_error(e),
    }
}

/// GET /users/:id - One profile
pub async fn get_user(
    State(handlers): State<UserHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_user_error(e.into()),
    };

    match handlers.get_handler.handle(GetUserQuery { user_id }).await {
        Ok(profile) => (StatusCode::OK, Json(UserResponse::from(&profile))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// PUT /users/:id - Edit profile details
pub async fn update_profile(
    State(handlers): State<UserHandlers>,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_user_error(e.into()),
    };

    let cmd = UpdateProfileCommand {
        user_id,
        name: req.name,
        email: req.email,
        age: req.age,
        bio: req.bio,
        goals: req.goals,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::OK, Json(UserResponse::from(&profile))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// POST /users/:id/goals - Append a goal
pub async fn add_goal(
    State(handlers): State<UserHandlers>,
    Path(user_id): Path<String>,
    payload: Result<Json<AddGoalRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_user_error(e.into()),
    };

    match handlers
        .update_handler
        .add_goal(AddGoalCommand {
            user_id,
            goal: req.goal,
        })
        .await
    {
        Ok(profile) => (StatusCode::OK, Json(UserResponse::from(&profile))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// DELETE /users/:id/goals/:index - Remove a goal by position
pub async fn remove_goal(
    State(handlers): State<UserHandlers>,
    Path((user_id, index)): Path<(String, String)>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_user_error(e.into()),
    };
    let Ok(index) = index.parse::<usize>() else {
        return ErrorResponse::validation("goal_index", "Goal index must be a non-negative integer")
            .into_response_with(StatusCode::BAD_REQUEST);
    };

    match handlers
        .update_handler
        .remove_goal(RemoveGoalCommand { user_id, index })
        .await
    {
        Ok(profile) => (StatusCode::OK, Json(UserResponse::from(&profile))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_user_error(error: UserError) -> Response {
    let status = status_for(error.code());
    let body = match &error {
        UserError::ValidationFailed { field, message } => {
            ErrorResponse::validation(field, message.clone())
        }
        UserError::StorageUnavailable(msg) => {
            tracing::error!(error = %msg, "User storage unavailable");
            ErrorResponse::storage_unavailable("Storage is temporarily unavailable")
        }
        UserError::NotFound(_) => ErrorResponse::new(error.code(), error.message()),
    };
    body.into_response_with(status)
}
