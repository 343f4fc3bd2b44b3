//! HTTP DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::profile::UserProfile;

/// Request to register a user. `username` is required; a missing one is
/// reported as a validation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterUserRequest {
    #[serde(alias = "name")]
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Partial profile edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub bio: Option<String>,
    pub goals: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddGoalRequest {
    pub goal: String,
}

/// Profile as returned by every user endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub goals: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&UserProfile> for UserResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id().to_string(),
            username: profile.name().to_string(),
            email: profile.email().to_string(),
            age: profile.age(),
            bio: profile.bio().map(str::to_string),
            goals: profile.goals().to_vec(),
            created_at: profile.created_at().as_datetime().to_rfc3339(),
            updated_at: profile.updated_at().as_datetime().to_rfc3339(),
        }
    }
}
