//! ListUsersHandler - Query handler for every registered profile.

use std::sync::Arc;

use crate::domain::profile::{UserError, UserProfile};
use crate::ports::UserRepository;

pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<UserProfile>, UserError> {
        Ok(self.repository.list().await?)
    }
}
