//! The learner's self-reported result of a single review.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a single review, as reported by the learner.
///
/// The wire spelling is the upper-case form used by the review submission
/// API: `"REMEMBERED"`, `"PARTIALLY"`, `"FORGOT"`. Anything else must be
/// rejected at the boundary via [`Outcome::from_str`] before it can reach the
/// scheduling or mastery code, which treat the enumeration as exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// The item was recalled in full.
    Remembered,
    /// The item was only partially recalled.
    Partially,
    /// The item could not be recalled.
    Forgot,
}

/// Error returned for a review-outcome string outside the three known
/// variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown review outcome {0:?} (expected REMEMBERED, PARTIALLY or FORGOT)")]
pub struct ParseOutcomeError(String);

impl Outcome {
    /// The wire spelling of this outcome.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remembered => "REMEMBERED",
            Self::Partially => "PARTIALLY",
            Self::Forgot => "FORGOT",
        }
    }
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REMEMBERED" => Ok(Self::Remembered),
            "PARTIALLY" => Ok(Self::Partially),
            "FORGOT" => Ok(Self::Forgot),
            other => Err(ParseOutcomeError(other.to_owned())),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_outcomes() {
        assert_eq!("REMEMBERED".parse(), Ok(Outcome::Remembered));
        assert_eq!("PARTIALLY".parse(), Ok(Outcome::Partially));
        assert_eq!("FORGOT".parse(), Ok(Outcome::Forgot));
    }

    #[test]
    fn test_parse_rejects_unknown_strings() {
        assert!("remembered".parse::<Outcome>().is_err());
        assert!("".parse::<Outcome>().is_err());
        assert!("MASTERED".parse::<Outcome>().is_err());
        assert!(" REMEMBERED".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_display_matches_wire_spelling() {
        assert_eq!(Outcome::Remembered.to_string(), "REMEMBERED");
        assert_eq!(Outcome::Partially.to_string(), "PARTIALLY");
        assert_eq!(Outcome::Forgot.to_string(), "FORGOT");
    }

    #[test]
    fn test_serde_uses_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&Outcome::Forgot).unwrap(),
            "\"FORGOT\""
        );
        let parsed: Outcome = serde_json::from_str("\"PARTIALLY\"").unwrap();
        assert_eq!(parsed, Outcome::Partially);
        assert!(serde_json::from_str::<Outcome>("\"partially\"").is_err());
    }
}
