//! HTTP adapter for user endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddGoalRequest, RegisterUserRequest, UpdateProfileRequest, UserResponse};
pub use handlers::UserHandlers;
pub use routes::user_routes;
