//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::profile::UserProfile;
use crate::ports::UserRepository;

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, age, bio, goals, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(profile.id().as_str())
        .bind(profile.name())
        .bind(profile.email())
        .bind(profile.age().map(i16::from))
        .bind(profile.bio())
        .bind(profile.goals())
        .bind(profile.created_at().as_datetime())
        .bind(profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::StorageUnavailable,
                format!("Failed to insert user: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::validation(
                "id",
                format!("User already exists: {}", profile.id()),
            ));
        }

        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                email = $3,
                age = $4,
                bio = $5,
                goals = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(profile.id().as_str())
        .bind(profile.name())
        .bind(profile.email())
        .bind(profile.age().map(i16::from))
        .bind(profile.bio())
        .bind(profile.goals())
        .bind(profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::StorageUnavailable,
                format!("Failed to update user: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", profile.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, age, bio, goals, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::StorageUnavailable,
                format!("Failed to fetch user: {}", e),
            )
        })?;

        row.map(row_to_profile).transpose()
    }

    async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, age, bio, goals, created_at, updated_at
            FROM users
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::StorageUnavailable,
                format!("Failed to list users: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_profile).collect()
    }
}

fn row_to_profile(row: sqlx::postgres::PgRow) -> Result<UserProfile, DomainError> {
    let decode = |column: &str, e: sqlx::Error| {
        DomainError::new(
            ErrorCode::StorageUnavailable,
            format!("Failed to get {}: {}", column, e),
        )
    };

    let id: String = row.try_get("id").map_err(|e| decode("id", e))?;
    let name: String = row.try_get("name").map_err(|e| decode("name", e))?;
    let email: String = row.try_get("email").map_err(|e| decode("email", e))?;
    let age: Option<i16> = row.try_get("age").map_err(|e| decode("age", e))?;
    let bio: Option<String> = row.try_get("bio").map_err(|e| decode("bio", e))?;
    let goals: Vec<String> = row.try_get("goals").map_err(|e| decode("goals", e))?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(|e| decode("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> =
        row.try_get("updated_at").map_err(|e| decode("updated_at", e))?;

    let age = age
        .map(u8::try_from)
        .transpose()
        .map_err(|e| {
            DomainError::new(
                ErrorCode::StorageUnavailable,
                format!("Invalid age in stored row: {}", e),
            )
        })?;

    Ok(UserProfile::reconstitute(
        UserId::new(id).map_err(|e| {
            DomainError::new(
                ErrorCode::StorageUnavailable,
                format!("Invalid user id in stored row: {}", e),
            )
        })?,
        name,
        email,
        age,
        bio,
        goals,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
