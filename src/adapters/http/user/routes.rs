//! HTTP routes for user endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_goal, get_user, list_users, register_user, remove_goal, update_profile, UserHandlers,
};

/// Creates the user router with all endpoints.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/users", post(register_user).get(list_users))
        .route("/users/:id", get(get_user).put(update_profile))
        .route("/users/:id/goals", post(add_goal))
        .route("/users/:id/goals/:index", delete(remove_goal))
        .with_state(handlers)
}
