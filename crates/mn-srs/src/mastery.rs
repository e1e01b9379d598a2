//! Mastery tracking.
//!
//! Each review outcome nudges the item's mastery level, an integer estimate
//! in `0..=100` of how well the item has been learned. The coarse mastery
//! status shown to the learner is derived from the level alone, so the two
//! can never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Mastery level at or above which an item counts as mastered.
pub const MASTERED_THRESHOLD: i32 = 80;

/// Mastery level at or above which an item counts as under review.
pub const REVIEWING_THRESHOLD: i32 = 40;

/// Coarse mastery bucket derived from the 0-100 mastery level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryStatus {
    /// Level below 40.
    NotMastered,
    /// Level in `40..80`.
    Reviewing,
    /// Level of 80 or above.
    Mastered,
}

impl MasteryStatus {
    /// Derive the status bucket for a mastery level.
    pub const fn from_level(level: i32) -> Self {
        if level >= MASTERED_THRESHOLD {
            Self::Mastered
        } else if level >= REVIEWING_THRESHOLD {
            Self::Reviewing
        } else {
            Self::NotMastered
        }
    }

    /// The snake_case wire spelling of this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotMastered => "not_mastered",
            Self::Reviewing => "reviewing",
            Self::Mastered => "mastered",
        }
    }
}

impl fmt::Display for MasteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mastery delta granted by a single review outcome.
const fn delta(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Remembered => 20,
        Outcome::Partially => 10,
        Outcome::Forgot => -10,
    }
}

/// Apply one review outcome to the current mastery level.
///
/// A missing level is treated as 0. The updated level is clamped into
/// `0..=100` and the matching status is derived from it, so the returned pair
/// is always consistent. Total function: there is no error path.
pub fn update(current_level: Option<i32>, outcome: Outcome) -> (i32, MasteryStatus) {
    let current = current_level.unwrap_or(0);
    let level = (current + delta(outcome)).clamp(0, 100);
    (level, MasteryStatus::from_level(level))
}
