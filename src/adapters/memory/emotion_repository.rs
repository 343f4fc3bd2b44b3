//! In-Memory Emotion Repository
//!
//! Keeps records in a vector guarded by an async lock.
//! Used by tests and when no database is configured.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::emotion::{EmotionKind, EmotionRecord, NewEmotionRecord};
use crate::domain::foundation::{DomainError, EmotionRecordId, Timestamp, UserId};
use crate::ports::EmotionRepository;

/// In-memory record store, insertion ordered.
#[derive(Debug, Clone)]
pub struct InMemoryEmotionRepository {
    records: Arc<RwLock<Vec<EmotionRecord>>>,
    available: Arc<AtomicBool>,
}

impl InMemoryEmotionRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Simulate the storage medium going away (or coming back).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored records across all users
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn ensure_available(&self) -> Result<(), DomainError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::storage("in-memory store is unavailable"))
        }
    }
}

impl Default for InMemoryEmotionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmotionRepository for InMemoryEmotionRepository {
    async fn create(&self, record: NewEmotionRecord) -> Result<EmotionRecord, DomainError> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let mut id = EmotionRecordId::new();
        while records.iter().any(|r| r.id() == &id) {
            id = EmotionRecordId::new();
        }
        let stored = EmotionRecord::from_new(id, record, Timestamp::now());
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        kind: Option<EmotionKind>,
    ) -> Result<Vec<EmotionRecord>, DomainError> {
        self.ensure_available()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.is_owned_by(user_id))
            .filter(|r| kind.map_or(true, |k| r.kind() == k))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &EmotionRecordId) -> Result<Option<EmotionRecord>, DomainError> {
        self.ensure_available()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn delete(&self, id: &EmotionRecordId) -> Result<bool, DomainError> {
        self.ensure_available()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() < before)
    }
}
