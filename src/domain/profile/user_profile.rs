//! User profile aggregate.
//!
//! Created at registration and changed only by explicit edits. Profiles are
//! never deleted by the application.

use serde::Serialize;

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Maximum length for the display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for the bio.
pub const MAX_BIO_LENGTH: usize = 1000;

/// Maximum number of personal goals kept on a profile.
pub const MAX_GOALS: usize = 20;

const MIN_AGE: u8 = 1;
const MAX_AGE: u8 = 120;

/// Partial edit of the mutable profile fields; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u8>,
    pub bio: Option<String>,
    pub goals: Option<Vec<String>>,
}

/// A registered user.
///
/// # Invariants
///
/// - `name` is 1-100 characters after trimming
/// - `email` is empty or contains `@`
/// - `age`, when set, is within 1-120
/// - `goals` are trimmed, non-empty, unique and at most 20
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    id: UserId,
    name: String,
    email: String,
    age: Option<u8>,
    bio: Option<String>,
    goals: Vec<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserProfile {
    /// Register a new user.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    /// - `InvalidFormat` if name is too long or email lacks `@`
    pub fn register(id: UserId, name: String, email: String) -> Result<Self, ValidationError> {
        let name = Self::validate_name(name)?;
        let email = Self::validate_email(email)?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            email,
            age: None,
            bio: None,
            goals: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a profile from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: String,
        age: Option<u8>,
        bio: Option<String>,
        goals: Vec<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            age,
            bio,
            goals,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a partial edit. All fields are validated before any is changed.
    pub fn apply(&mut self, changes: ProfileChanges) -> Result<(), ValidationError> {
        let name = changes.name.map(Self::validate_name).transpose()?;
        let email = changes.email.map(Self::validate_email).transpose()?;
        if let Some(age) = changes.age {
            Self::validate_age(age)?;
        }
        let bio = changes.bio.map(Self::validate_bio).transpose()?;
        let goals = changes.goals.map(Self::validate_goals).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if changes.age.is_some() {
            self.age = changes.age;
        }
        if let Some(bio) = bio {
            self.bio = if bio.is_empty() { None } else { Some(bio) };
        }
        if let Some(goals) = goals {
            self.goals = goals;
        }
        self.touch();
        Ok(())
    }

    /// Append a goal.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the goal is blank
    /// - `InvalidFormat` if it duplicates an existing goal or the list is full
    pub fn add_goal(&mut self, goal: impl Into<String>) -> Result<(), ValidationError> {
        let mut goals = self.goals.clone();
        goals.push(goal.into());
        self.goals = Self::validate_goals(goals)?;
        self.touch();
        Ok(())
    }

    /// Remove the goal at `index`.
    pub fn remove_goal(&mut self, index: usize) -> Result<String, ValidationError> {
        if index >= self.goals.len() {
            return Err(ValidationError::out_of_range(
                "goal_index",
                0,
                self.goals.len() as i32 - 1,
                index.min(i32::MAX as usize) as i32,
            ));
        }
        let removed = self.goals.remove(index);
        self.touch();
        Ok(removed)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_name(name: String) -> Result<String, ValidationError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(name)
    }

    fn validate_email(email: String) -> Result<String, ValidationError> {
        let email = email.trim().to_string();
        if !email.is_empty() && !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(email)
    }

    fn validate_age(age: u8) -> Result<(), ValidationError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::out_of_range(
                "age",
                MIN_AGE as i32,
                MAX_AGE as i32,
                age as i32,
            ));
        }
        Ok(())
    }

    fn validate_bio(bio: String) -> Result<String, ValidationError> {
        let bio = bio.trim().to_string();
        if bio.chars().count() > MAX_BIO_LENGTH {
            return Err(ValidationError::invalid_format(
                "bio",
                format!("must be at most {} characters", MAX_BIO_LENGTH),
            ));
        }
        Ok(bio)
    }

    fn validate_goals(goals: Vec<String>) -> Result<Vec<String>, ValidationError> {
        let mut cleaned: Vec<String> = Vec::with_capacity(goals.len());
        for goal in goals {
            let goal = goal.trim().to_string();
            if goal.is_empty() {
                return Err(ValidationError::empty_field("goal"));
            }
            if cleaned.contains(&goal) {
                return Err(ValidationError::invalid_format(
                    "goal",
                    format!("'{}' is already listed", goal),
                ));
            }
            cleaned.push(goal);
        }
        if cleaned.len() > MAX_GOALS {
            return Err(ValidationError::invalid_format(
                "goals",
                format!("at most {} goals are allowed", MAX_GOALS),
            ));
        }
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::register(
            UserId::new("u-1").unwrap(),
            "Ana".to_string(),
            "ana@example.com".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn register_trims_and_accepts_empty_email() {
        let p = UserProfile::register(
            UserId::new("u-2").unwrap(),
            "  Luis ".to_string(),
            String::new(),
        )
        .unwrap();
        assert_eq!(p.name(), "Luis");
        assert_eq!(p.email(), "");
        assert!(p.goals().is_empty());
    }

    #[test]
    fn register_rejects_blank_name() {
        let err = UserProfile::register(UserId::new("u").unwrap(), "  ".into(), String::new())
            .unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn register_rejects_malformed_email() {
        let err = UserProfile::register(UserId::new("u").unwrap(), "Ana".into(), "nope".into())
            .unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn apply_updates_only_given_fields() {
        let mut p = profile();
        p.apply(ProfileChanges {
            age: Some(30),
            bio: Some("likes hiking".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(p.name(), "Ana");
        assert_eq!(p.age(), Some(30));
        assert_eq!(p.bio(), Some("likes hiking"));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut p = profile();
        let result = p.apply(ProfileChanges {
            name: Some("Ana Maria".to_string()),
            age: Some(0),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(p.name(), "Ana");
    }

    #[test]
    fn empty_bio_clears_it() {
        let mut p = profile();
        p.apply(ProfileChanges {
            bio: Some("x".into()),
            ..Default::default()
        })
        .unwrap();
        p.apply(ProfileChanges {
            bio: Some("   ".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(p.bio(), None);
    }

    #[test]
    fn goals_can_be_added_and_removed() {
        let mut p = profile();
        p.add_goal("Be more aware of my emotions").unwrap();
        p.add_goal("  Sleep better ").unwrap();
        assert_eq!(p.goals().len(), 2);
        assert_eq!(p.goals()[1], "Sleep better");

        let removed = p.remove_goal(0).unwrap();
        assert_eq!(removed, "Be more aware of my emotions");
        assert_eq!(p.goals(), &["Sleep better".to_string()]);
    }

    #[test]
    fn duplicate_and_blank_goals_are_rejected() {
        let mut p = profile();
        p.add_goal("Walk daily").unwrap();
        assert!(p.add_goal("Walk daily").is_err());
        assert!(p.add_goal("  ").is_err());
        assert_eq!(p.goals().len(), 1);
    }

    #[test]
    fn removing_missing_goal_fails() {
        let mut p = profile();
        assert!(p.remove_goal(0).is_err());
    }
}
