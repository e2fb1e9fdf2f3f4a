//! Playtime — a pet played some activity for some duration.

use serde::{Deserialize, Serialize};

use crate::id::{PlaytimeId, SubjectId};
use crate::time::{self, Timestamp};

/// A stored playtime record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playtime {
    pub id: PlaytimeId,
    pub subject_id: SubjectId,
    pub played_at: Timestamp,
    pub activity: Option<String>,
    pub duration_minutes: i64,
    pub version: i64,
}

/// Client-supplied playtime payload, see [`FeedingDraft`](crate::feeding::FeedingDraft).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaytimeDraft {
    #[serde(default)]
    pub id: Option<PlaytimeId>,
    #[serde(default)]
    pub subject_id: SubjectId,
    #[serde(default = "time::now")]
    pub played_at: Timestamp,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub duration_minutes: i64,
    #[serde(default)]
    pub version: Option<i64>,
}

impl PlaytimeDraft {
    #[must_use]
    pub fn new(subject_id: SubjectId, duration_minutes: i64) -> Self {
        Self {
            id: None,
            subject_id,
            played_at: time::now(),
            activity: None,
            duration_minutes,
            version: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: PlaytimeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    #[must_use]
    pub fn into_playtime(self, id: PlaytimeId, version: i64) -> Playtime {
        Playtime {
            id,
            subject_id: self.subject_id,
            played_at: self.played_at,
            activity: self.activity,
            duration_minutes: self.duration_minutes,
            version,
        }
    }
}

impl From<Playtime> for PlaytimeDraft {
    fn from(playtime: Playtime) -> Self {
        Self {
            id: Some(playtime.id),
            subject_id: playtime.subject_id,
            played_at: playtime.played_at,
            activity: playtime.activity,
            duration_minutes: playtime.duration_minutes,
            version: Some(playtime.version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_full_payload() {
        let draft: PlaytimeDraft = serde_json::from_str(
            r#"{"id": 3, "subjectId": 1, "playedAt": "2024-05-01T10:00:00Z",
                "activity": "fetch", "durationMinutes": 15, "version": 2}"#,
        )
        .unwrap();
        assert_eq!(draft.id, Some(PlaytimeId::new(3)));
        assert_eq!(draft.activity.as_deref(), Some("fetch"));
        assert_eq!(draft.duration_minutes, 15);
        assert_eq!(draft.version, Some(2));
        assert_eq!(draft.played_at.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn should_default_subject_to_zero_when_omitted() {
        let draft: PlaytimeDraft = serde_json::from_str(r#"{"durationMinutes": 5}"#).unwrap();
        assert_eq!(draft.subject_id, SubjectId::default());
        assert_eq!(draft.subject_id.get(), 0);
    }

    #[test]
    fn should_reject_payload_with_wrongly_typed_field() {
        let result: Result<PlaytimeDraft, _> =
            serde_json::from_str(r#"{"durationMinutes": "long"}"#);
        assert!(result.is_err());
    }
}
