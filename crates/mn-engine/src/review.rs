//! Recording review outcomes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use mn_srs::{MasteryStatus, Outcome, mastery, schedule};
use mn_store::{Mistake, MistakeStore, MistakeUpdate, NewReviewRecord, ReviewRecord};

use crate::error::EngineError;

/// One review event to record.
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    /// The reviewed mistake
    pub mistake_id: Uuid,
    /// The learner who reviewed it
    pub user_id: Uuid,
    /// The learner's reported outcome
    pub result: Outcome,
    /// Optional free-text notes
    pub notes: Option<String>,
}

/// Record one review of a mistake and return the appended record.
///
/// The whole sequence runs under the store's per-item guard, so concurrent
/// submissions for the same mistake serialize and the derived review count
/// never races into a duplicate:
///
/// 1. read the latest record's `review_count` (0 if none) and add one;
/// 2. schedule the next review for the new count and outcome;
/// 3. append the review record, timestamped `now`;
/// 4. re-derive the item's mastery level/status and write them back together
///    with the new count and schedule, keeping the item-level copy of
///    `next_review_time` identical to the record's.
///
/// A mistake that has been deleted out from under its history is a
/// data-integrity anomaly, not a failure: the record is still written (the
/// history is append-only and must not be lost to a dangling reference), the
/// mastery update is skipped, and the anomaly is logged.
pub async fn record_review<S: MistakeStore>(
    store: &S,
    submission: ReviewSubmission,
    now: DateTime<Utc>,
) -> Result<ReviewRecord, EngineError> {
    let _guard = store.lock_item(submission.mistake_id).await?;

    let prior_count = store
        .latest_record(submission.mistake_id)
        .await?
        .map_or(0, |r| r.review_count);
    let review_count = prior_count + 1;
    let next_review_time = schedule::next_review_time(review_count, submission.result, now);

    let record = store
        .insert_record(NewReviewRecord {
            mistake_id: submission.mistake_id,
            user_id: submission.user_id,
            review_time: now,
            result: submission.result,
            review_count,
            next_review_time,
            notes: submission.notes,
        })
        .await?;

    match store.fetch_item(submission.mistake_id).await? {
        Some(item) => {
            let item = item.normalize();
            let (mastery_level, mastery_status) =
                mastery::update(item.mastery_level, submission.result);
            let updated = store
                .update_item(
                    submission.mistake_id,
                    MistakeUpdate {
                        mastery_level,
                        mastery_status,
                        review_count,
                        next_review_time,
                        updated_at: now,
                    },
                )
                .await?;
            if updated {
                tracing::debug!(
                    mistake_id = %submission.mistake_id,
                    result = %submission.result,
                    review_count,
                    mastery_level,
                    "review recorded"
                );
            } else {
                tracing::warn!(
                    mistake_id = %submission.mistake_id,
                    "mistake disappeared while its review was being recorded; mastery update lost"
                );
            }
        }
        None => {
            tracing::warn!(
                mistake_id = %submission.mistake_id,
                "review recorded for a mistake that no longer exists; mastery update skipped"
            );
        }
    }

    Ok(record)
}

/// Mistakes whose scheduled review is due, soonest first.
///
/// Keeps not-yet-mastered items whose `next_review_time` has arrived
/// (inclusive of `now`). Items that were never scheduled are not pending -
/// they surface through the recommendation queue instead.
pub fn pending_reviews(items: Vec<Mistake>, now: DateTime<Utc>) -> Vec<Mistake> {
    let mut due: Vec<Mistake> = items
        .into_iter()
        .map(Mistake::normalize)
        .filter(|m| m.mastery_status != MasteryStatus::Mastered)
        .filter(|m| m.next_review_time.is_some_and(|t| t <= now))
        .collect();
    due.sort_by_key(|m| m.next_review_time);
    due
}
