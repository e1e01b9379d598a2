//! Models transferred between the review engine and the backing store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mn_srs::{MasteryStatus, Outcome};

/// Why the learner got the item wrong when it was first recorded.
///
/// Classification is supplied when the mistake is captured and never changed
/// by the engine; the recommendation ranker uses it as its final tie-break.
/// Unrecognized wire strings deserialize to [`Unknown`] rather than failing,
/// since old clients may send reason codes this build does not know.
///
/// [`Unknown`]: ErrorReason::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    /// The underlying concept was not understood.
    ConceptError,
    /// The right concept, the wrong solution method.
    MethodError,
    /// A slip in the arithmetic or algebra.
    CalculationError,
    /// The problem statement was misread.
    ReadingError,
    /// A lapse of attention on otherwise known material.
    CarelessError,
    /// No classification, or one this build does not recognize.
    #[serde(other)]
    Unknown,
}

impl ErrorReason {
    /// The snake_case wire spelling of this reason.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConceptError => "concept_error",
            Self::MethodError => "method_error",
            Self::CalculationError => "calculation_error",
            Self::ReadingError => "reading_error",
            Self::CarelessError => "careless_error",
            Self::Unknown => "unknown",
        }
    }
}

/// A recorded mistake under review - the mutable aggregate of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    /// Unique mistake identifier
    pub id: Uuid,
    /// Owning learner (indexed by store implementations)
    pub user_id: Uuid,
    /// Subject this mistake was filed under, if any
    pub subject_id: Option<Uuid>,
    /// Knowledge point this mistake exercises, if any
    pub knowledge_point_id: Option<Uuid>,
    /// Display label; opaque to the engine
    pub title: String,
    /// Why the learner got it wrong; never mutated by the engine
    pub error_reason: ErrorReason,
    /// Coarse mastery bucket, kept consistent with `mastery_level`
    pub mastery_status: MasteryStatus,
    /// Mastery level in `0..=100`; absent means 0
    pub mastery_level: Option<i32>,
    /// Total completed reviews; absent means 0
    pub review_count: Option<i32>,
    /// When the item should next be reviewed; absent means not yet scheduled
    pub next_review_time: Option<DateTime<Utc>>,
    /// When the mistake was recorded
    pub created_at: DateTime<Utc>,
    /// When the mistake was last updated
    pub updated_at: DateTime<Utc>,
}

impl Mistake {
    /// Substitute the storage defaults and clamp out-of-range persisted data.
    ///
    /// Absent `mastery_level`/`review_count` become 0; a level outside
    /// `0..=100` (corrupted row) is clamped rather than propagated into
    /// further arithmetic. Engine entry points apply this exactly once,
    /// before any ranking or scheduling computation, so no other call site
    /// needs its own fallback.
    pub fn normalize(mut self) -> Self {
        self.mastery_level = Some(self.mastery_level.unwrap_or(0).clamp(0, 100));
        self.review_count = Some(self.review_count.unwrap_or(0).max(0));
        self
    }

    /// Mastery level with the storage default applied.
    pub fn level(&self) -> i32 {
        self.mastery_level.unwrap_or(0)
    }

    /// Review count with the storage default applied.
    pub fn reviews(&self) -> i32 {
        self.review_count.unwrap_or(0)
    }
}

/// One completed review of a mistake - an immutable log entry.
///
/// A mistake owns zero or more records, ordered by `review_time`. Records are
/// created exactly once per review event and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Unique record identifier, assigned by the store
    pub id: Uuid,
    /// The reviewed mistake
    pub mistake_id: Uuid,
    /// The learner who reviewed it
    pub user_id: Uuid,
    /// When the review happened
    pub review_time: DateTime<Utc>,
    /// The learner's reported outcome
    pub result: Outcome,
    /// The mistake's total review count *after* this review
    pub review_count: i32,
    /// The next review instant computed for this outcome
    pub next_review_time: DateTime<Utc>,
    /// Free-text notes the learner attached, if any
    pub notes: Option<String>,
}

/// Insert form of [`ReviewRecord`]; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReviewRecord {
    pub mistake_id: Uuid,
    pub user_id: Uuid,
    pub review_time: DateTime<Utc>,
    pub result: Outcome,
    pub review_count: i32,
    pub next_review_time: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Write-back form for the aggregate after a review has been recorded.
///
/// Carries the item-level copy of the schedule along with the mastery fields
/// so the item and its latest record can never disagree about when the next
/// review is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakeUpdate {
    /// Updated mastery level in `0..=100`
    pub mastery_level: i32,
    /// Status bucket derived from `mastery_level`
    pub mastery_status: MasteryStatus,
    /// Total completed reviews after this review
    pub review_count: i32,
    /// Next review instant, identical to the inserted record's
    pub next_review_time: DateTime<Utc>,
    /// Write timestamp, injected by the caller's clock
    pub updated_at: DateTime<Utc>,
}
