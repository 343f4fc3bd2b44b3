//! In-Memory User Repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::profile::UserProfile;
use crate::ports::UserRepository;

/// In-memory profile store keyed by user id
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(profile.id()) {
            return Err(DomainError::validation(
                "id",
                format!("User already exists: {}", profile.id()),
            ));
        }
        profiles.insert(profile.id().clone(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.get_mut(profile.id()) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", profile.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        let mut all: Vec<UserProfile> = self.profiles.read().await.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(all)
    }
}
