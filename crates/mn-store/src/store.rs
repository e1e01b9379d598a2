//! The abstract store the review engine runs against.

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Mistake, MistakeUpdate, NewReviewRecord, ReviewRecord};

/// Read/write access to mistakes and their review history.
///
/// Implementations own atomicity and isolation. Everything the engine does
/// while holding an [`ItemGuard`](Self::ItemGuard) for a mistake must apply
/// as a single atomic unit with respect to other holders of the same
/// mistake's guard; guards for *different* mistakes must not block one
/// another. A SQL-backed implementation typically maps the guard onto a
/// transaction holding a per-item row lock; [`MemoryStore`] maps it onto a
/// per-item mutex.
///
/// Review records are append-only: nothing in this trait can mutate or
/// delete one once inserted.
///
/// [`MemoryStore`]: crate::MemoryStore
#[allow(async_fn_in_trait)] // implementations decide Send-ness of their futures
pub trait MistakeStore: Send + Sync {
    /// Serialization token for one mistake, held while recording a review.
    type ItemGuard: Send;

    /// Acquire the guard for a mistake, waiting if another holder has it.
    async fn lock_item(&self, mistake_id: Uuid) -> Result<Self::ItemGuard, StoreError>;

    /// Fetch a mistake by id.
    async fn fetch_item(&self, mistake_id: Uuid) -> Result<Option<Mistake>, StoreError>;

    /// Fetch the most recent review record for a mistake, if any.
    ///
    /// "Most recent" is the record with the highest `review_count`, which is
    /// also the latest by `review_time` since counts only grow.
    async fn latest_record(&self, mistake_id: Uuid) -> Result<Option<ReviewRecord>, StoreError>;

    /// Append a review record and return it with its assigned id.
    async fn insert_record(&self, record: NewReviewRecord) -> Result<ReviewRecord, StoreError>;

    /// Write the post-review aggregate state back onto a mistake.
    ///
    /// Returns `false` when no mistake with this id exists (the caller
    /// decides whether that is an error).
    async fn update_item(&self, mistake_id: Uuid, update: MistakeUpdate)
    -> Result<bool, StoreError>;

    /// All mistakes belonging to a learner, newest first.
    async fn items_for_user(&self, user_id: Uuid) -> Result<Vec<Mistake>, StoreError>;

    /// Full review history of a mistake, ascending by `review_time`.
    async fn records_for_item(&self, mistake_id: Uuid) -> Result<Vec<ReviewRecord>, StoreError>;

    /// All review records a learner has produced, ascending by `review_time`.
    async fn records_for_user(&self, user_id: Uuid) -> Result<Vec<ReviewRecord>, StoreError>;
}
