//! Emotion record entity.
//!
//! An emotion record is one journal entry: what the user felt, how strongly,
//! on which day, and an optional note. Records are immutable once stored;
//! the only lifecycle transition after creation is deletion.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{EmotionRecordId, Intensity, Timestamp, UserId};

use super::EmotionKind;

/// An entry that has been accepted but not yet stored.
///
/// `intensity` and `kind` are valid by construction. The note is kept exactly
/// as supplied, empty strings and surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmotionRecord {
    user_id: UserId,
    kind: EmotionKind,
    intensity: Intensity,
    note: Option<String>,
    date: NaiveDate,
}

impl NewEmotionRecord {
    pub fn new(
        user_id: UserId,
        kind: EmotionKind,
        intensity: Intensity,
        note: Option<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            user_id,
            kind,
            intensity,
            note,
            date,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn kind(&self) -> EmotionKind {
        self.kind
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A stored emotion entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionRecord {
    id: EmotionRecordId,
    user_id: UserId,
    kind: EmotionKind,
    intensity: Intensity,
    note: Option<String>,
    date: NaiveDate,
    created_at: Timestamp,
}

impl EmotionRecord {
    /// Attach store-generated fields to a validated entry.
    pub fn from_new(id: EmotionRecordId, new: NewEmotionRecord, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id: new.user_id,
            kind: new.kind,
            intensity: new.intensity,
            note: new.note,
            date: new.date,
            created_at,
        }
    }

    /// Reconstitute a record from persistence (no validation).
    pub fn reconstitute(
        id: EmotionRecordId,
        user_id: UserId,
        kind: EmotionKind,
        intensity: Intensity,
        note: Option<String>,
        date: NaiveDate,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            intensity,
            note,
            date,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &EmotionRecordId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn kind(&self) -> EmotionKind {
        self.kind
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if `user_id` owns this record.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// True when this record carries exactly the user-supplied content of `new`.
    pub fn matches(&self, new: &NewEmotionRecord) -> bool {
        self.user_id == new.user_id
            && self.kind == new.kind
            && self.intensity == new.intensity
            && self.note == new.note
            && self.date == new.date
    }
}
