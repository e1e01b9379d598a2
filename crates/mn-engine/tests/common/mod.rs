use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use mn_srs::MasteryStatus;
use mn_store::{ErrorReason, Mistake};

/// Fixed "current instant" shared by the tests; everything the engine does is
/// a function of the injected clock, so no test reads the real one.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

/// Builder for seed mistakes with sensible freshly-captured defaults.
pub struct MistakeBuilder {
    mistake: Mistake,
}

impl MistakeBuilder {
    pub fn new(user_id: Uuid) -> Self {
        let created = fixed_now() - Duration::days(14);
        Self {
            mistake: Mistake {
                id: Uuid::new_v4(),
                user_id,
                subject_id: None,
                knowledge_point_id: None,
                title: "seed mistake".to_owned(),
                error_reason: ErrorReason::Unknown,
                mastery_status: MasteryStatus::NotMastered,
                mastery_level: Some(0),
                review_count: Some(0),
                next_review_time: None,
                created_at: created,
                updated_at: created,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.mistake.title = title.to_owned();
        self
    }

    /// Sets the level and keeps the status consistent with it.
    pub fn level(mut self, level: i32) -> Self {
        self.mistake.mastery_level = Some(level);
        self.mistake.mastery_status = MasteryStatus::from_level(level);
        self
    }

    pub fn reviews(mut self, count: i32) -> Self {
        self.mistake.review_count = Some(count);
        self
    }

    pub fn reason(mut self, reason: ErrorReason) -> Self {
        self.mistake.error_reason = reason;
        self
    }

    pub fn next_review(mut self, at: DateTime<Utc>) -> Self {
        self.mistake.next_review_time = Some(at);
        self
    }

    pub fn subject(mut self, subject_id: Uuid) -> Self {
        self.mistake.subject_id = Some(subject_id);
        self
    }

    pub fn knowledge_point(mut self, knowledge_point_id: Uuid) -> Self {
        self.mistake.knowledge_point_id = Some(knowledge_point_id);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.mistake.created_at = at;
        self.mistake.updated_at = at;
        self
    }

    pub fn build(self) -> Mistake {
        self.mistake
    }
}
