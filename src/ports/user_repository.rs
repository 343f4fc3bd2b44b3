//! UserRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::UserProfile;

/// Repository for registered users and their profiles
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a newly registered profile
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Overwrite an existing profile; `UserNotFound` if it does not exist
    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Find profile by user ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Every profile, oldest registration first
    async fn list(&self) -> Result<Vec<UserProfile>, DomainError>;
}
