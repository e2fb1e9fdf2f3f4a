//! Feeding — a pet was given some amount of some food at some time.

use serde::{Deserialize, Serialize};

use crate::id::{FeedingId, SubjectId};
use crate::time::{self, Timestamp};

/// A stored feeding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feeding {
    pub id: FeedingId,
    pub subject_id: SubjectId,
    pub fed_at: Timestamp,
    pub food: Option<String>,
    pub amount: i64,
    /// Optimistic-concurrency token, bumped by the store on every update.
    pub version: i64,
}

/// Client-supplied feeding payload used for both create and full replacement.
///
/// `id` and `version` are ignored on create. On update `id` must match the
/// target and `version`, when present, must match the stored version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingDraft {
    #[serde(default)]
    pub id: Option<FeedingId>,
    #[serde(default)]
    pub subject_id: SubjectId,
    #[serde(default = "time::now")]
    pub fed_at: Timestamp,
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub version: Option<i64>,
}

impl FeedingDraft {
    /// Start a draft for `subject_id` fed `amount`, timestamped now.
    #[must_use]
    pub fn new(subject_id: SubjectId, amount: i64) -> Self {
        Self {
            id: None,
            subject_id,
            fed_at: time::now(),
            food: None,
            amount,
            version: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: FeedingId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_food(mut self, food: impl Into<String>) -> Self {
        self.food = Some(food.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    /// Materialise the draft as the record stored under `id` at `version`.
    #[must_use]
    pub fn into_feeding(self, id: FeedingId, version: i64) -> Feeding {
        Feeding {
            id,
            subject_id: self.subject_id,
            fed_at: self.fed_at,
            food: self.food,
            amount: self.amount,
            version,
        }
    }
}

impl From<Feeding> for FeedingDraft {
    fn from(feeding: Feeding) -> Self {
        Self {
            id: Some(feeding.id),
            subject_id: feeding.subject_id,
            fed_at: feeding.fed_at,
            food: feeding.food,
            amount: feeding.amount,
            version: Some(feeding.version),
        }
    }
}
