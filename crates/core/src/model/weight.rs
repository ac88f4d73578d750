use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WeightError {
    #[error("option weight must be between {min} and {max}, got {got}", min = OptionWeight::MIN.0, max = OptionWeight::MAX.0)]
    OutOfRange { got: u8 },
}

/// Score contribution of a single answer option.
///
/// Weights live in the closed range `[1, 4]`; `4` is the best answer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionWeight(u8);

impl OptionWeight {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(4);

    /// # Errors
    ///
    /// Returns `WeightError::OutOfRange` if `value` is outside `[1, 4]`.
    pub const fn new(value: u8) -> Result<Self, WeightError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(WeightError::OutOfRange { got: value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for OptionWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionWeight({})", self.0)
    }
}

impl fmt::Display for OptionWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for OptionWeight {
    type Error = WeightError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionWeight> for u8 {
    fn from(weight: OptionWeight) -> Self {
        weight.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for value in 1..=4 {
            assert_eq!(OptionWeight::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn rejects_zero_and_five() {
        assert_eq!(
            OptionWeight::new(0),
            Err(WeightError::OutOfRange { got: 0 })
        );
        assert_eq!(
            OptionWeight::new(5),
            Err(WeightError::OutOfRange { got: 5 })
        );
    }

    #[test]
    fn error_message_names_bounds() {
        let err = OptionWeight::new(9).unwrap_err();
        assert_eq!(err.to_string(), "option weight must be between 1 and 4, got 9");
    }
}
