//! Profile edit handlers: partial detail updates and goal list changes.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};
use crate::domain::profile::{ProfileChanges, UserError, UserProfile};
use crate::ports::UserRepository;

/// Command to change profile details. `None` fields are left as they are.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub bio: Option<String>,
    pub goals: Option<Vec<String>>,
}

impl UpdateProfileCommand {
    /// A command that changes nothing yet.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            name: None,
            email: None,
            age: None,
            bio: None,
            goals: None,
        }
    }
}

/// Command to append one goal.
#[derive(Debug, Clone)]
pub struct AddGoalCommand {
    pub user_id: UserId,
    pub goal: String,
}

/// Command to remove the goal at `index`.
#[derive(Debug, Clone)]
pub struct RemoveGoalCommand {
    pub user_id: UserId,
    pub index: usize,
}

/// Handler for every profile edit.
///
/// Loads the profile, applies the change through the aggregate and writes
/// it back in full.
pub struct UpdateProfileHandler {
    repository: Arc<dyn UserRepository>,
}

impl UpdateProfileHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UserProfile, UserError> {
        let age = cmd.age.map(age_from_input).transpose()?;
        let changes = ProfileChanges {
            name: cmd.name,
            email: cmd.email,
            age,
            bio: cmd.bio,
            goals: cmd.goals,
        };

        self.edit(cmd.user_id, |profile| profile.apply(changes)).await
    }

    pub async fn add_goal(&self, cmd: AddGoalCommand) -> Result<UserProfile, UserError> {
        self.edit(cmd.user_id, |profile| profile.add_goal(cmd.goal)).await
    }

    pub async fn remove_goal(&self, cmd: RemoveGoalCommand) -> Result<UserProfile, UserError> {
        self.edit(cmd.user_id, |profile| profile.remove_goal(cmd.index).map(|_| ()))
            .await
    }

    async fn edit<F>(&self, user_id: UserId, change: F) -> Result<UserProfile, UserError>
    where
        F: FnOnce(&mut UserProfile) -> Result<(), ValidationError>,
    {
        let mut profile = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| UserError::not_found(user_id.clone()))?;

        change(&mut profile)?;

        self.repository
            .update(&profile)
            .await
            .map_err(|e| not_found_or(e, &user_id))?;

        tracing::info!(user_id = %user_id, "Profile updated");
        Ok(profile)
    }
}

fn age_from_input(age: i64) -> Result<u8, ValidationError> {
    u8::try_from(age)
        .map_err(|_| ValidationError::out_of_range("age", 1, 120, age.clamp(-1, 1_000) as i32))
}

fn not_found_or(err: DomainError, user_id: &UserId) -> UserError {
    if err.code == ErrorCode::UserNotFound {
        UserError::not_found(user_id.clone())
    } else {
        err.into()
    }
}
