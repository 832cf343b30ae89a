//! A score normalised to the unit interval.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A finite float in `[0, 1]`.
///
/// Used for wizard stats and spell strength. Deserialization goes through
/// [`UnitScore::new`], so an out-of-range value in generated JSON is rejected
/// rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UnitScore(f64);

impl UnitScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    pub fn new(value: f64) -> Result<Self, DomainError> {
        Self::for_field("score", value)
    }

    /// Like [`UnitScore::new`] but names the offending field in the error.
    pub fn for_field(field: &'static str, value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::OutOfRange {
                field,
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UnitScore {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitScore> for f64 {
    fn from(score: UnitScore) -> Self {
        score.0
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
