//! Validated percentage scores.
//!
//! The executive summary carries three named percentage scores ("rings").
//! Each is an integer in `0..=100`; anything else in the source JSON is a
//! generator bug, so the bound is enforced at deserialisation rather than
//! left for the presentation layer to discover.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Errors that can occur when constructing a validated score.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// The value was outside `0..=100`.
    #[error("score must be between 0 and 100, got {0}")]
    OutOfRange(u64),
}

/// A percentage score guaranteed to be in `0..=100`.
///
/// Serialises as a bare integer. Deserialisation rejects out-of-range
/// values with a descriptive error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ToSchema)]
pub struct RingScore(#[schema(maximum = 100)] u8);

impl RingScore {
    /// Creates a new `RingScore`, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > 100 {
            return Err(ScoreError::OutOfRange(u64::from(value)));
        }
        Ok(Self(value))
    }

    /// Returns the score as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for RingScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RingScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for RingScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        let value = u8::try_from(raw).map_err(|_| {
            serde::de::Error::custom(ScoreError::OutOfRange(raw))
        })?;
        RingScore::new(value).map_err(serde::de::Error::custom)
    }
}

/// The three named percentage scores shown as rings on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RingScores {
    /// Overall regulatory compliance.
    pub compliance: RingScore,
    /// Process and timeliness.
    pub process: RingScore,
    /// Data hygiene.
    pub data: RingScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_values() {
        assert_eq!(RingScore::new(0).expect("0 is valid").get(), 0);
        assert_eq!(RingScore::new(100).expect("100 is valid").get(), 100);
    }

    #[test]
    fn rejects_out_of_range_construction() {
        let err = RingScore::new(101).expect_err("101 should be rejected");
        assert!(matches!(err, ScoreError::OutOfRange(101)));
    }

    #[test]
    fn deserialises_valid_scores() {
        let scores: RingScores =
            serde_json::from_str(r#"{"compliance":42,"process":61,"data":88}"#)
                .expect("valid scores should parse");
        assert_eq!(scores.compliance.get(), 42);
        assert_eq!(scores.process.get(), 61);
        assert_eq!(scores.data.get(), 88);
    }

    #[test]
    fn rejects_out_of_range_on_deserialise() {
        let result: Result<RingScore, _> = serde_json::from_str("101");
        assert!(result.is_err(), "101 should fail to deserialise");

        let result: Result<RingScore, _> = serde_json::from_str("-1");
        assert!(result.is_err(), "-1 should fail to deserialise");
    }

    #[test]
    fn round_trips_as_bare_integer() {
        let score = RingScore::new(73).expect("valid score");
        assert_eq!(serde_json::to_string(&score).expect("serialise"), "73");
    }
}
