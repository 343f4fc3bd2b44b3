//! Intensity value object for self-reported emotion strength (1 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Self-reported strength of an emotion entry, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    /// Lowest accepted intensity.
    pub const MIN: u8 = 1;

    /// Highest accepted intensity.
    pub const MAX: u8 = 10;

    /// Creates an Intensity, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(ValidationError::out_of_range(
                "intensity",
                Self::MIN as i32,
                Self::MAX as i32,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(5)
    }
}

impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Intensity::try_new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn intensity_accepts_bounds() {
        assert_eq!(Intensity::try_new(1).unwrap().value(), 1);
        assert_eq!(Intensity::try_new(10).unwrap().value(), 10);
    }

    #[test]
    fn intensity_rejects_zero_and_eleven() {
        assert!(matches!(
            Intensity::try_new(0),
            Err(ValidationError::OutOfRange { actual: 0, .. })
        ));
        assert!(Intensity::try_new(11).is_err());
    }

    #[test]
    fn intensity_default_is_midpoint() {
        assert_eq!(Intensity::default().value(), 5);
    }

    #[test]
    fn intensity_displays_over_ten() {
        assert_eq!(Intensity::try_new(7).unwrap().to_string(), "7/10");
    }

    #[test]
    fn intensity_deserialization_validates() {
        let ok: Intensity = serde_json::from_str("3").unwrap();
        assert_eq!(ok.value(), 3);
        assert!(serde_json::from_str::<Intensity>("0").is_err());
        assert!(serde_json::from_str::<Intensity>("42").is_err());
    }

    proptest! {
        #[test]
        fn every_value_in_range_is_accepted(v in 1i64..=10) {
            prop_assert_eq!(Intensity::try_new(v).unwrap().value() as i64, v);
        }

        #[test]
        fn every_value_outside_range_is_rejected(
            v in prop_oneof![i64::MIN..1i64, 11i64..i64::MAX]
        ) {
            prop_assert!(Intensity::try_new(v).is_err());
        }
    }
}
