//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod emotion;
pub mod user;

pub use emotion::{
    DeleteEmotionCommand, DeleteEmotionHandler, DeleteEmotionResult, GetEmotionStatsHandler,
    GetEmotionStatsQuery, ListEmotionsHandler, ListEmotionsQuery, LogEmotionCommand,
    LogEmotionHandler,
};
pub use user::{
    AddGoalCommand, GetUserHandler, GetUserQuery, ListUsersHandler, RegisterUserCommand,
    RegisterUserHandler, RemoveGoalCommand, UpdateProfileCommand, UpdateProfileHandler,
};
