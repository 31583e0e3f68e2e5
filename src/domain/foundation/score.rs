//! Bounded 1-5 scores used for criterion weights and pro/con impacts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowest accepted weight or impact.
pub const SCORE_MIN: u8 = 1;

/// Highest accepted weight or impact.
pub const SCORE_MAX: u8 = 5;

fn check_range(field: &str, value: i64) -> Result<u8, ValidationError> {
    if value < i64::from(SCORE_MIN) || value > i64::from(SCORE_MAX) {
        let actual = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        return Err(ValidationError::out_of_range(
            field,
            i32::from(SCORE_MIN),
            i32::from(SCORE_MAX),
            actual,
        ));
    }
    Ok(value as u8)
}

/// Importance of a criterion, 1 (minor) to 5 (critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Weight(u8);

impl Weight {
    /// Weight applied when a suggestion omits one.
    pub const DEFAULT: Self = Self(3);

    /// Creates a Weight, returning error if outside 1-5.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        check_range("weight", value).map(Self)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Weight scaled onto 0.2-1.0.
    pub fn normalized(&self) -> f64 {
        f64::from(self.0) / f64::from(SCORE_MAX)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Weight {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for i64 {
    fn from(weight: Weight) -> Self {
        i64::from(weight.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strength of a single pro or con, 1 (slight) to 5 (decisive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ImpactScore(u8);

impl ImpactScore {
    /// Creates an ImpactScore, returning error if outside 1-5.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        check_range("impactScore", value).map(Self)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ImpactScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ImpactScore> for i64 {
    fn from(impact: ImpactScore) -> Self {
        i64::from(impact.0)
    }
}

impl fmt::Display for ImpactScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_accepts_one_through_five() {
        for v in 1..=5 {
            assert_eq!(Weight::try_new(v).unwrap().value(), v as u8);
        }
    }

    #[test]
    fn weight_rejects_out_of_range() {
        match Weight::try_new(6) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "weight");
                assert_eq!(min, 1);
                assert_eq!(max, 5);
                assert_eq!(actual, 6);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(Weight::try_new(0).is_err());
        assert!(Weight::try_new(-3).is_err());
    }

    #[test]
    fn weight_default_is_three() {
        assert_eq!(Weight::default().value(), 3);
    }

    #[test]
    fn weight_normalizes_against_five() {
        assert!((Weight::try_new(5).unwrap().normalized() - 1.0).abs() < f64::EPSILON);
        assert!((Weight::try_new(1).unwrap().normalized() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn impact_rejects_zero() {
        let err = ImpactScore::try_new(0).unwrap_err();
        assert_eq!(err.field(), "impactScore");
    }

    #[test]
    fn huge_values_report_saturated_actual() {
        match ImpactScore::try_new(i64::MAX) {
            Err(ValidationError::OutOfRange { actual, .. }) => assert_eq!(actual, i32::MAX),
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn deserialization_enforces_range() {
        let ok: Weight = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<Weight>("9").is_err());
        assert!(serde_json::from_str::<ImpactScore>("0").is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&ImpactScore::try_new(2).unwrap()).unwrap();
        assert_eq!(json, "2");
    }
}
