//! Ranking outstanding mistakes into a prioritized study queue.
//!
//! The ordering is a lexicographic comparison over four keys, each breaking
//! only the ties the previous key left unresolved - deliberately not a
//! weighted score. The keys, in order: surface what is overdue, then what is
//! least mastered, then what has been least practiced, then what reflects
//! the most serious kind of gap. Each key extractor is a named function so
//! it can be audited and tested on its own.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use mn_srs::MasteryStatus;
use mn_store::{ErrorReason, Mistake};

/// First key: 0 when the item's scheduled review is overdue, 1 otherwise.
///
/// "Overdue" means `next_review_time` is present and strictly before `now`;
/// an unscheduled item is not overdue.
pub fn due_rank(mistake: &Mistake, now: DateTime<Utc>) -> u8 {
    match mistake.next_review_time {
        Some(t) if t < now => 0,
        _ => 1,
    }
}

/// Fourth key: severity of the error reason; lower sorts earlier.
///
/// A conceptual gap outranks a wrong method, which outranks a calculation
/// slip, a misread statement, and a careless lapse, in that order.
/// Unclassified reasons sort last.
pub const fn severity_rank(reason: ErrorReason) -> u8 {
    match reason {
        ErrorReason::ConceptError => 1,
        ErrorReason::MethodError => 2,
        ErrorReason::CalculationError => 3,
        ErrorReason::ReadingError => 4,
        ErrorReason::CarelessError => 5,
        ErrorReason::Unknown => 6,
    }
}

/// The full four-key lexicographic sort key. Expects a normalized item.
fn sort_key(mistake: &Mistake, now: DateTime<Utc>) -> (u8, i32, i32, u8) {
    (
        due_rank(mistake, now),
        mistake.level(),
        mistake.reviews(),
        severity_rank(mistake.error_reason),
    )
}

/// Produce the prioritized study queue for a learner's mistakes.
///
/// Mastered items are dropped, the rest are normalized once and sorted by
/// the four-key comparator, and the queue is truncated to `limit`. The sort
/// is stable, so ranking an already-ranked, unchanged list returns the same
/// order.
pub fn rank(items: Vec<Mistake>, now: DateTime<Utc>, limit: usize) -> Vec<Mistake> {
    let mut queue: Vec<Mistake> = items
        .into_iter()
        .map(Mistake::normalize)
        .filter(|m| m.mastery_status != MasteryStatus::Mastered)
        .collect();
    queue.sort_by_key(|m| sort_key(m, now));
    queue.truncate(limit);
    queue
}

/// Number of items in today's workload.
///
/// Counts not-yet-mastered items that are overdue *or were never scheduled*:
/// a freshly captured mistake belongs in today's count even though the rank
/// comparator does not yet treat it as overdue.
pub fn count_due_today(items: &[Mistake], now: DateTime<Utc>) -> usize {
    items
        .iter()
        .filter(|m| m.mastery_status != MasteryStatus::Mastered)
        .filter(|m| m.next_review_time.is_none_or(|t| t < now))
        .count()
}

/// Study queue for one knowledge point, weakest first.
///
/// Keeps not-yet-mastered mistakes filed under the given knowledge point and
/// orders them by (mastery level, review count) ascending. No limit: the
/// point of a weak-point drill is to see everything.
pub fn rank_for_knowledge_point(items: Vec<Mistake>, knowledge_point_id: Uuid) -> Vec<Mistake> {
    let mut queue: Vec<Mistake> = items
        .into_iter()
        .map(Mistake::normalize)
        .filter(|m| m.knowledge_point_id == Some(knowledge_point_id))
        .filter(|m| m.mastery_status != MasteryStatus::Mastered)
        .collect();
    queue.sort_by_key(|m| (m.level(), m.reviews()));
    queue
}
