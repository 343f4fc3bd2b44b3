//! RegisterUserHandler - Command handler for creating a user profile.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::profile::{UserError, UserProfile};
use crate::ports::UserRepository;

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    /// Stored as an empty string when omitted.
    pub email: Option<String>,
}

/// Handler for registering users. Ids are generated here.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<UserProfile, UserError> {
        let profile = UserProfile::register(
            UserId::generate(),
            cmd.username,
            cmd.email.unwrap_or_default(),
        )?;

        self.repository.create(&profile).await?;

        tracing::info!(user_id = %profile.id(), "User registered");
        Ok(profile)
    }
}
