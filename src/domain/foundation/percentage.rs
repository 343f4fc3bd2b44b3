//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Rounded `100 * part / whole`, capped at 100. A zero `whole` yields zero.
    ///
    /// Halves round up, so 1 of 8 gives 13%.
    pub fn of_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let rounded = (200 * part as u128 + whole as u128) / (2 * whole as u128);
        Self(rounded.min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Percentage::try_new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        assert!(Percentage::try_new(100).is_ok());
        assert!(Percentage::try_new(101).is_err());
    }

    #[test]
    fn of_ratio_rounds_half_up() {
        assert_eq!(Percentage::of_ratio(1, 7).value(), 14);
        assert_eq!(Percentage::of_ratio(1, 8).value(), 13);
        assert_eq!(Percentage::of_ratio(3, 7).value(), 43);
        assert_eq!(Percentage::of_ratio(7, 7).value(), 100);
    }

    #[test]
    fn of_ratio_caps_at_hundred() {
        assert_eq!(Percentage::of_ratio(20, 7), Percentage::HUNDRED);
    }

    #[test]
    fn of_ratio_with_zero_whole_is_zero() {
        assert_eq!(Percentage::of_ratio(5, 0), Percentage::ZERO);
    }

    #[test]
    fn deserialize_rejects_over_100() {
        let ok: Percentage = serde_json::from_str("100").unwrap();
        assert_eq!(ok, Percentage::HUNDRED);
        assert!(serde_json::from_str::<Percentage>("101").is_err());
        assert_eq!(serde_json::to_string(&Percentage::new(29)).unwrap(), "29");
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(format!("{}", Percentage::new(42)), "42%");
    }
}
