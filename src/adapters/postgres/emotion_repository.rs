//! PostgreSQL implementation of EmotionRepository.
//!
//! Rows are returned in insertion order (`seq`), matching the in-memory store.
//! Kind and intensity are re-validated when rows are decoded.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::emotion::{EmotionKind, EmotionRecord, NewEmotionRecord};
use crate::domain::foundation::{
    DomainError, EmotionRecordId, ErrorCode, Intensity, Timestamp, UserId,
};
use crate::ports::EmotionRepository;

const SELECT_COLUMNS: &str = "id, user_id, emotion, intensity, note, entry_date, created_at";

/// PostgreSQL implementation of EmotionRepository.
#[derive(Clone)]
pub struct PostgresEmotionRepository {
    pool: PgPool,
}

impl PostgresEmotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmotionRepository for PostgresEmotionRepository {
    async fn create(&self, record: NewEmotionRecord) -> Result<EmotionRecord, DomainError> {
        let id = EmotionRecordId::new();
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO emotions (id, user_id, emotion, intensity, note, entry_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(record.user_id().as_str())
        .bind(record.kind().as_str())
        .bind(record.intensity().value() as i16)
        .bind(record.note())
        .bind(record.date())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to insert emotion", e))?;

        row_to_record(row)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        kind: Option<EmotionKind>,
    ) -> Result<Vec<EmotionRecord>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM emotions
            WHERE user_id = $1 AND ($2::TEXT IS NULL OR emotion = $2)
            ORDER BY seq ASC
            "#
        ))
        .bind(user_id.as_str())
        .bind(kind.map(|k| k.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch emotions by user", e))?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn find_by_id(&self, id: &EmotionRecordId) -> Result<Option<EmotionRecord>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM emotions WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to fetch emotion", e))?;

        row.map(row_to_record).transpose()
    }

    async fn delete(&self, id: &EmotionRecordId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM emotions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete emotion", e))?;

        Ok(result.rows_affected() > 0)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::StorageUnavailable, format!("{}: {}", context, e))
}

fn corrupt_row(column: &str, reason: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::StorageUnavailable,
        format!("Invalid {} in stored row: {}", column, reason),
    )
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<EmotionRecord, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| corrupt_row("id", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| corrupt_row("user_id", e))?;
    let emotion: String = row.try_get("emotion").map_err(|e| corrupt_row("emotion", e))?;
    let intensity: i16 = row
        .try_get("intensity")
        .map_err(|e| corrupt_row("intensity", e))?;
    let note: Option<String> = row.try_get("note").map_err(|e| corrupt_row("note", e))?;
    let date: NaiveDate = row
        .try_get("entry_date")
        .map_err(|e| corrupt_row("entry_date", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| corrupt_row("created_at", e))?;

    Ok(EmotionRecord::reconstitute(
        EmotionRecordId::from_uuid(id),
        UserId::new(user_id).map_err(|e| corrupt_row("user_id", e))?,
        emotion
            .parse::<EmotionKind>()
            .map_err(|e| corrupt_row("emotion", e))?,
        Intensity::try_new(i64::from(intensity)).map_err(|e| corrupt_row("intensity", e))?,
        note,
        date,
        Timestamp::from_datetime(created_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_storage_unavailable() {
        let err = storage_error("Failed to insert emotion", sqlx::Error::PoolTimedOut);
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
        assert!(err.message.starts_with("Failed to insert emotion"));
    }

    #[test]
    fn corrupt_row_names_the_column() {
        let err = corrupt_row("intensity", "out of range");
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
        assert!(err.message.contains("intensity"));
    }
}
