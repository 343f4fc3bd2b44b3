//! ListEmotionsHandler - Query handler for a user's emotion history.

use std::sync::Arc;

use crate::domain::emotion::{EmotionError, EmotionKind, EmotionRecord};
use crate::domain::foundation::UserId;
use crate::ports::EmotionRepository;

/// Query for one user's history, optionally restricted to a single kind.
#[derive(Debug, Clone)]
pub struct ListEmotionsQuery {
    pub user_id: UserId,
    pub kind: Option<EmotionKind>,
}

impl ListEmotionsQuery {
    /// Every entry the user has logged.
    pub fn all(user_id: UserId) -> Self {
        Self { user_id, kind: None }
    }
}

/// Handler for listing emotion history.
pub struct ListEmotionsHandler {
    repository: Arc<dyn EmotionRepository>,
}

impl ListEmotionsHandler {
    pub fn new(repository: Arc<dyn EmotionRepository>) -> Self {
        Self { repository }
    }

    /// Returns the history newest first: by `date`, then by `created_at`,
    /// then by reverse insertion order.
    /// An empty history is an empty list, not an error.
    pub async fn handle(&self, query: ListEmotionsQuery) -> Result<Vec<EmotionRecord>, EmotionError> {
        let mut records = self
            .repository
            .list_by_user(&query.user_id, query.kind)
            .await?;

        // Stores return insertion order; reversing first lets the stable
        // sort keep later inserts ahead on equal keys.
        records.reverse();
        records.sort_by(|a, b| {
            b.date()
                .cmp(&a.date())
                .then_with(|| b.created_at().cmp(a.created_at()))
        });

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion::NewEmotionRecord;
    use crate::domain::foundation::{
        DomainError, EmotionRecordId, ErrorCode, Intensity, Timestamp,
    };
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::sync::Mutex;

    struct MockEmotionRepository {
        records: Mutex<Vec<EmotionRecord>>,
        fail: bool,
    }

    impl MockEmotionRepository {
        fn with_records(records: Vec<EmotionRecord>) -> Self {
            Self {
                records: Mutex::new(records),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl EmotionRepository for MockEmotionRepository {
        async fn create(&self, _record: NewEmotionRecord) -> Result<EmotionRecord, DomainError> {
            Err(DomainError::storage("not used"))
        }

        async fn list_by_user(
            &self,
            user_id: &UserId,
            kind: Option<EmotionKind>,
        ) -> Result<Vec<EmotionRecord>, DomainError> {
            if self.fail {
                return Err(DomainError::storage("database offline"));
            }
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.is_owned_by(user_id))
                .filter(|r| kind.map_or(true, |k| r.kind() == k))
                .cloned()
                .collect())
        }

        async fn find_by_id(
            &self,
            _id: &EmotionRecordId,
        ) -> Result<Option<EmotionRecord>, DomainError> {
            Ok(None)
        }

        async fn delete(&self, _id: &EmotionRecordId) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    fn record(kind: EmotionKind, day: u32, created_secs: i64) -> EmotionRecord {
        EmotionRecord::reconstitute(
            EmotionRecordId::new(),
            user(),
            kind,
            Intensity::default(),
            None,
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            Timestamp::from_datetime(Utc.timestamp_opt(1_700_000_000 + created_secs, 0).unwrap()),
        )
    }

    #[tokio::test]
    async fn sorts_newest_date_first_then_latest_created() {
        let early = record(EmotionKind::Happy, 1, 0);
        let late_a = record(EmotionKind::Sad, 3, 10);
        let late_b = record(EmotionKind::Calm, 3, 20);
        let middle = record(EmotionKind::Angry, 2, 30);
        let repo = Arc::new(MockEmotionRepository::with_records(vec![
            early.clone(),
            late_a.clone(),
            late_b.clone(),
            middle.clone(),
        ]));
        let handler = ListEmotionsHandler::new(repo);

        let listed = handler.handle(ListEmotionsQuery::all(user())).await.unwrap();

        assert_eq!(listed, vec![late_b, late_a, middle, early]);
    }

    #[tokio::test]
    async fn identical_date_and_timestamp_list_last_inserted_first() {
        let first = record(EmotionKind::Happy, 5, 0);
        let second = record(EmotionKind::Sad, 5, 0);
        let third = record(EmotionKind::Calm, 5, 0);
        let repo = Arc::new(MockEmotionRepository::with_records(vec![
            first.clone(),
            second.clone(),
            third.clone(),
        ]));
        let handler = ListEmotionsHandler::new(repo);

        let listed = handler.handle(ListEmotionsQuery::all(user())).await.unwrap();

        assert_eq!(listed, vec![third, second, first]);
    }

    #[tokio::test]
    async fn kind_filter_is_applied() {
        let repo = Arc::new(MockEmotionRepository::with_records(vec![
            record(EmotionKind::Happy, 1, 0),
            record(EmotionKind::Sad, 2, 1),
            record(EmotionKind::Happy, 3, 2),
        ]));
        let handler = ListEmotionsHandler::new(repo);

        let listed = handler
            .handle(ListEmotionsQuery {
                user_id: user(),
                kind: Some(EmotionKind::Happy),
            })
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|r| r.kind() == EmotionKind::Happy));
    }

    #[tokio::test]
    async fn empty_history_is_empty_list() {
        let handler = ListEmotionsHandler::new(Arc::new(MockEmotionRepository::with_records(vec![])));
        let listed = handler.handle(ListEmotionsQuery::all(user())).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced() {
        let handler = ListEmotionsHandler::new(Arc::new(MockEmotionRepository::failing()));
        let err = handler.handle(ListEmotionsQuery::all(user())).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
    }
}
