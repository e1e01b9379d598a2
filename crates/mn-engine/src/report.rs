//! Study-report aggregation.
//!
//! Pure summaries over a learner's mistakes and review history. Callers pass
//! slices already scoped to one learner (as returned by
//! `MistakeStore::items_for_user` / `records_for_user`); nothing here
//! filters by user.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use mn_srs::MasteryStatus;
use mn_store::{ErrorReason, Mistake, ReviewRecord};

const ALL_REASONS: [ErrorReason; 6] = [
    ErrorReason::ConceptError,
    ErrorReason::MethodError,
    ErrorReason::CalculationError,
    ErrorReason::ReadingError,
    ErrorReason::CarelessError,
    ErrorReason::Unknown,
];

/// Mistake count for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectCount {
    /// Subject id; `None` collects mistakes filed without a subject
    pub subject_id: Option<Uuid>,
    /// Number of mistakes in that subject
    pub mistakes: usize,
}

/// Mistake count for one error reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonCount {
    /// The classification
    pub reason: ErrorReason,
    /// Number of mistakes with that classification
    pub mistakes: usize,
}

/// Whole-notebook study summary for one learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudySummary {
    /// Total recorded mistakes
    pub total_mistakes: usize,
    /// Total completed reviews across all mistakes
    pub total_reviews: usize,
    /// Mistakes currently mastered
    pub mastered: usize,
    /// Mistakes currently overdue or never scheduled
    pub due: usize,
    /// Per-subject breakdown, ordered by subject id (unfiled first)
    pub by_subject: Vec<SubjectCount>,
    /// Per-reason breakdown, most severe reason first; zero counts omitted
    pub by_reason: Vec<ReasonCount>,
}

/// Summarize a learner's whole notebook.
pub fn study_summary(
    items: &[Mistake],
    records: &[ReviewRecord],
    now: DateTime<Utc>,
) -> StudySummary {
    let mastered = items
        .iter()
        .filter(|m| m.mastery_status == MasteryStatus::Mastered)
        .count();
    let due = crate::recommendation::count_due_today(items, now);

    let mut subjects: BTreeMap<Option<Uuid>, usize> = BTreeMap::new();
    for item in items {
        *subjects.entry(item.subject_id).or_default() += 1;
    }
    let by_subject = subjects
        .into_iter()
        .map(|(subject_id, mistakes)| SubjectCount {
            subject_id,
            mistakes,
        })
        .collect();

    StudySummary {
        total_mistakes: items.len(),
        total_reviews: records.len(),
        mastered,
        due,
        by_subject,
        by_reason: reason_breakdown(items.iter()),
    }
}

/// Trailing-window study summary (7 days for a weekly report, 30 for a
/// monthly one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    /// Window length in days
    pub days: i64,
    /// Mistakes recorded inside the window
    pub new_mistakes: usize,
    /// Reviews performed inside the window
    pub reviews: usize,
    /// Window mistakes that have already been mastered
    pub mastered: usize,
    /// Per-reason breakdown of the window's new mistakes
    pub by_reason: Vec<ReasonCount>,
}

/// Summarize the trailing `days` of activity.
pub fn period_summary(
    items: &[Mistake],
    records: &[ReviewRecord],
    now: DateTime<Utc>,
    days: i64,
) -> PeriodSummary {
    let since = now - Duration::days(days);
    let new_items: Vec<&Mistake> = items.iter().filter(|m| m.created_at > since).collect();
    let reviews = records.iter().filter(|r| r.review_time > since).count();
    let mastered = new_items
        .iter()
        .filter(|m| m.mastery_status == MasteryStatus::Mastered)
        .count();

    PeriodSummary {
        days,
        new_mistakes: new_items.len(),
        reviews,
        mastered,
        by_reason: reason_breakdown(new_items.iter().copied()),
    }
}

/// Count mistakes per error reason, most severe first, dropping zero rows.
fn reason_breakdown<'a, I>(items: I) -> Vec<ReasonCount>
where
    I: Iterator<Item = &'a Mistake>,
{
    let mut counts = [0usize; ALL_REASONS.len()];
    for item in items {
        let slot = ALL_REASONS
            .iter()
            .position(|r| *r == item.error_reason)
            .unwrap_or(ALL_REASONS.len() - 1);
        counts[slot] += 1;
    }
    ALL_REASONS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(reason, mistakes)| ReasonCount {
            reason: *reason,
            mistakes,
        })
        .collect()
}
