//! In-memory [`MistakeStore`] implementation.
//!
//! Reference semantics for the trait contract and the substrate the
//! integration tests run against. Embedders that do not need durable storage
//! (demos, single-session tools) can use it directly.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Mistake, MistakeUpdate, NewReviewRecord, ReviewRecord};
use crate::store::MistakeStore;

#[derive(Debug, Default)]
struct Inner {
    mistakes: HashMap<Uuid, Mistake>,
    // append-only; insertion order is also review_count order per mistake
    records: Vec<ReviewRecord>,
}

/// Mutex-protected maps with a per-item lock table.
///
/// The item guard is an owned lock on a per-mistake mutex, so concurrent
/// reviews of different mistakes proceed in parallel while reviews of the
/// same mistake queue up.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    item_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a mistake into the store, replacing any previous row with its id.
    ///
    /// This is the capture-side write the engine itself never performs;
    /// tests and embedders use it to seed the notebook.
    pub async fn insert_mistake(&self, mistake: Mistake) {
        self.inner.lock().await.mistakes.insert(mistake.id, mistake);
    }

    /// Number of review records across all mistakes.
    pub async fn record_count(&self) -> usize {
        self.inner.lock().await.records.len()
    }
}

impl MistakeStore for MemoryStore {
    type ItemGuard = OwnedMutexGuard<()>;

    async fn lock_item(&self, mistake_id: Uuid) -> Result<Self::ItemGuard, StoreError> {
        let lock = {
            let mut locks = self.item_locks.lock().await;
            Arc::clone(locks.entry(mistake_id).or_default())
        };
        Ok(lock.lock_owned().await)
    }

    async fn fetch_item(&self, mistake_id: Uuid) -> Result<Option<Mistake>, StoreError> {
        Ok(self.inner.lock().await.mistakes.get(&mistake_id).cloned())
    }

    async fn latest_record(&self, mistake_id: Uuid) -> Result<Option<ReviewRecord>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .records
            .iter()
            .filter(|r| r.mistake_id == mistake_id)
            .max_by_key(|r| (r.review_count, r.review_time))
            .cloned())
    }

    async fn insert_record(&self, record: NewReviewRecord) -> Result<ReviewRecord, StoreError> {
        let record = ReviewRecord {
            id: Uuid::new_v4(),
            mistake_id: record.mistake_id,
            user_id: record.user_id,
            review_time: record.review_time,
            result: record.result,
            review_count: record.review_count,
            next_review_time: record.next_review_time,
            notes: record.notes,
        };
        self.inner.lock().await.records.push(record.clone());
        Ok(record)
    }

    async fn update_item(
        &self,
        mistake_id: Uuid,
        update: MistakeUpdate,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;
        match inner.mistakes.get_mut(&mistake_id) {
            Some(mistake) => {
                mistake.mastery_level = Some(update.mastery_level);
                mistake.mastery_status = update.mastery_status;
                mistake.review_count = Some(update.review_count);
                mistake.next_review_time = Some(update.next_review_time);
                mistake.updated_at = update.updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn items_for_user(&self, user_id: Uuid) -> Result<Vec<Mistake>, StoreError> {
        let inner = self.inner.lock().await;
        let mut items: Vec<Mistake> = inner
            .mistakes
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn records_for_item(&self, mistake_id: Uuid) -> Result<Vec<ReviewRecord>, StoreError> {
        let inner = self.inner.lock().await;
        let mut records: Vec<ReviewRecord> = inner
            .records
            .iter()
            .filter(|r| r.mistake_id == mistake_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.review_time);
        Ok(records)
    }

    async fn records_for_user(&self, user_id: Uuid) -> Result<Vec<ReviewRecord>, StoreError> {
        let inner = self.inner.lock().await;
        let mut records: Vec<ReviewRecord> = inner
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.review_time);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use mn_srs::{MasteryStatus, Outcome};

    use crate::models::ErrorReason;

    fn at(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, day, 12, 0, 0).unwrap()
    }

    fn mistake(user_id: Uuid, day: u32) -> Mistake {
        Mistake {
            id: Uuid::new_v4(),
            user_id,
            subject_id: None,
            knowledge_point_id: None,
            title: "sample".to_owned(),
            error_reason: ErrorReason::MethodError,
            mastery_status: MasteryStatus::NotMastered,
            mastery_level: Some(0),
            review_count: Some(0),
            next_review_time: None,
            created_at: at(day),
            updated_at: at(day),
        }
    }

    fn record(mistake_id: Uuid, user_id: Uuid, count: i32, day: u32) -> NewReviewRecord {
        NewReviewRecord {
            mistake_id,
            user_id,
            review_time: at(day),
            result: Outcome::Remembered,
            review_count: count,
            next_review_time: at(day) + Duration::days(1),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_inserted_mistake() {
        let store = MemoryStore::new();
        let m = mistake(Uuid::new_v4(), 1);
        store.insert_mistake(m.clone()).await;
        assert_eq!(store.fetch_item(m.id).await.unwrap(), Some(m));
    }

    #[tokio::test]
    async fn test_latest_record_is_highest_count() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let m = mistake(user, 1);
        store.insert_mistake(m.clone()).await;
        store.insert_record(record(m.id, user, 1, 2)).await.unwrap();
        store.insert_record(record(m.id, user, 2, 5)).await.unwrap();

        let latest = store.latest_record(m.id).await.unwrap().unwrap();
        assert_eq!(latest.review_count, 2);
    }

    #[tokio::test]
    async fn test_latest_record_none_for_unreviewed_item() {
        let store = MemoryStore::new();
        assert_eq!(store.latest_record(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_records_are_append_only_and_time_ordered() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let m = mistake(user, 1);
        store.insert_mistake(m.clone()).await;
        store.insert_record(record(m.id, user, 1, 9)).await.unwrap();
        store.insert_record(record(m.id, user, 2, 3)).await.unwrap();

        let history = store.records_for_item(m.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].review_time < history[1].review_time);
        assert_eq!(store.record_count().await, 2);
    }

    #[tokio::test]
    async fn test_update_item_unknown_id_returns_false() {
        let store = MemoryStore::new();
        let update = MistakeUpdate {
            mastery_level: 20,
            mastery_status: MasteryStatus::NotMastered,
            review_count: 1,
            next_review_time: at(2),
            updated_at: at(1),
        };
        assert!(!store.update_item(Uuid::new_v4(), update).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_item_writes_all_fields() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let m = mistake(user, 1);
        store.insert_mistake(m.clone()).await;

        let update = MistakeUpdate {
            mastery_level: 60,
            mastery_status: MasteryStatus::Reviewing,
            review_count: 3,
            next_review_time: at(8),
            updated_at: at(4),
        };
        assert!(store.update_item(m.id, update).await.unwrap());

        let stored = store.fetch_item(m.id).await.unwrap().unwrap();
        assert_eq!(stored.mastery_level, Some(60));
        assert_eq!(stored.mastery_status, MasteryStatus::Reviewing);
        assert_eq!(stored.review_count, Some(3));
        assert_eq!(stored.next_review_time, Some(at(8)));
        assert_eq!(stored.updated_at, at(4));
    }

    #[tokio::test]
    async fn test_items_for_user_newest_first_and_scoped() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let old = mistake(user, 1);
        let new = mistake(user, 20);
        let other = mistake(Uuid::new_v4(), 10);
        store.insert_mistake(old.clone()).await;
        store.insert_mistake(new.clone()).await;
        store.insert_mistake(other).await;

        let items = store.items_for_user(user).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, new.id);
        assert_eq!(items[1].id, old.id);
    }
}
