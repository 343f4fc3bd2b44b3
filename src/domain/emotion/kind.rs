//! The closed set of mood categories the journal recognizes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A recognized mood category.
///
/// Declaration order is the canonical display order; it plays no part in
/// statistics tie-breaking, which follows record order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKind {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    Excited,
    Tired,
    Grateful,
}

impl EmotionKind {
    /// Every recognized kind in display order.
    pub const ALL: [EmotionKind; 8] = [
        EmotionKind::Happy,
        EmotionKind::Sad,
        EmotionKind::Angry,
        EmotionKind::Anxious,
        EmotionKind::Calm,
        EmotionKind::Excited,
        EmotionKind::Tired,
        EmotionKind::Grateful,
    ];

    /// Wire and storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKind::Happy => "happy",
            EmotionKind::Sad => "sad",
            EmotionKind::Angry => "angry",
            EmotionKind::Anxious => "anxious",
            EmotionKind::Calm => "calm",
            EmotionKind::Excited => "excited",
            EmotionKind::Tired => "tired",
            EmotionKind::Grateful => "grateful",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EmotionKind::Happy => "Happy",
            EmotionKind::Sad => "Sad",
            EmotionKind::Angry => "Angry",
            EmotionKind::Anxious => "Anxious",
            EmotionKind::Calm => "Calm",
            EmotionKind::Excited => "Excited",
            EmotionKind::Tired => "Tired",
            EmotionKind::Grateful => "Grateful",
        }
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if needle.is_empty() {
            return Err(ValidationError::empty_field("emotion"));
        }
        EmotionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "emotion",
                    format!("'{}' is not a recognized emotion", needle),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_recognized_kind() {
        for kind in EmotionKind::ALL {
            assert_eq!(kind.as_str().parse::<EmotionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(" Happy ".parse::<EmotionKind>().unwrap(), EmotionKind::Happy);
        assert_eq!("CALM".parse::<EmotionKind>().unwrap(), EmotionKind::Calm);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "bored".parse::<EmotionKind>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert_eq!(err.field(), "emotion");
    }

    #[test]
    fn rejects_empty_kind() {
        assert!(matches!(
            "".parse::<EmotionKind>(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EmotionKind::Grateful).unwrap(), "\"grateful\"");
        let kind: EmotionKind = serde_json::from_str("\"tired\"").unwrap();
        assert_eq!(kind, EmotionKind::Tired);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(EmotionKind::Anxious.to_string(), "anxious");
        assert_eq!(EmotionKind::Anxious.label(), "Anxious");
    }
}
