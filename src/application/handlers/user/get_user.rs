//! GetUserHandler - Query handler for a single profile.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::profile::{UserError, UserProfile};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<UserProfile, UserError> {
        self.repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(query.user_id))
    }
}
