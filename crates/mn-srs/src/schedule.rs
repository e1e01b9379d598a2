//! Review interval scheduling.
//!
//! A fixed six-step interval table approximates the Ebbinghaus forgetting
//! curve: each successful review moves the learner one step further along
//! the table, a forgotten item resets to the first step. The schedule
//! position is not stored anywhere; it is recomputed from the item's review
//! count and the latest outcome, which keeps the persistent state down to a
//! single monotonic counter.

use chrono::{DateTime, Duration, Utc};

use crate::outcome::Outcome;

/// Review intervals in days, indexed by schedule step.
pub const INTERVAL_DAYS: [i64; 6] = [1, 2, 4, 7, 15, 30];

/// Pick the interval-table step for a review.
///
/// `review_count` is the item's total review count including the review being
/// scheduled. `FORGOT` always resets to the first step. `PARTIALLY` holds the
/// learner on the previous step instead of advancing. The chosen index is
/// clamped into the table at both ends; the lower clamp covers `PARTIALLY`
/// with a zero count, which would otherwise underflow.
fn step_index(review_count: i32, outcome: Outcome) -> usize {
    let last = (INTERVAL_DAYS.len() - 1) as i32;
    let index = match outcome {
        Outcome::Forgot => 0,
        Outcome::Partially => review_count - 1,
        Outcome::Remembered => review_count,
    };
    index.clamp(0, last) as usize
}

/// Interval in days granted by a review, without the date arithmetic.
pub fn interval_days(review_count: i32, outcome: Outcome) -> i64 {
    INTERVAL_DAYS[step_index(review_count, outcome)]
}

/// Compute the next review instant for an item.
///
/// # Arguments
///
/// * `review_count` - The item's review count after the review being recorded
/// * `outcome` - The learner's reported result for this review
/// * `now` - The current instant, injected by the caller
pub fn next_review_time(review_count: i32, outcome: Outcome, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(interval_days(review_count, outcome))
}
