//! User profile command and query handlers.

mod get_user;
mod list_users;
mod register_user;
mod update_profile;

pub use get_user::{GetUserHandler, GetUserQuery};
pub use list_users::ListUsersHandler;
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
pub use update_profile::{
    AddGoalCommand, RemoveGoalCommand, UpdateProfileCommand, UpdateProfileHandler,
};
