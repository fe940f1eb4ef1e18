//! Platform payloads
//!
//! Response and request bodies exchanged with the learning platform's REST API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// User statistics, keyed by stat name (e.g. `courses_enrolled`, `points`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(pub BTreeMap<String, i64>);

impl Stats {
    pub fn get(&self, key: &str) -> Option<i64> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<const N: usize> From<[(&str, i64); N]> for Stats {
    fn from(entries: [(&str, i64); N]) -> Self {
        Stats(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    LessonCompleted,
    CourseEnrolled,
    AchievementEarned,
    #[default]
    #[serde(other)]
    Other,
}

/// A single entry of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", alias = "kind", default)]
    pub kind: ActivityKind,
    pub description: String,
    /// Relative time label rendered by the server, e.g. "2 hours ago".
    #[serde(rename = "time", alias = "timestamp", default)]
    pub time_label: String,
}

impl Activity {
    pub fn new(kind: ActivityKind, description: &str, time_label: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            time_label: time_label.to_string(),
        }
    }
}

impl Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description, self.time_label)
    }
}

/// Most recent first.
pub type Activities = Vec<Activity>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCheck {
    pub has_new: bool,
    #[serde(default)]
    pub count: u32,
}

impl NotificationCheck {
    /// Count worth announcing, given the count announced last. `None` when
    /// nothing is new or the same count was already announced.
    pub fn announcement(&self, last_announced: Option<u32>) -> Option<u32> {
        (self.has_new && self.count > 0 && last_announced != Some(self.count))
            .then_some(self.count)
    }

    /// Nothing new and nothing pending: any earlier announcement is stale.
    pub fn is_caught_up(&self) -> bool {
        !self.has_new && self.count == 0
    }
}

/// A payload delivered by one of the pollers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResult {
    Stats(Stats),
    Activities(Activities),
    NotificationCheck(NotificationCheck),
}

/// A student quote shown in the testimonials carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub author: String,
    pub course: String,
    pub quote: String,
}

impl Testimonial {
    pub fn new(author: &str, course: &str, quote: &str) -> Self {
        Self {
            author: author.to_string(),
            course: course.to_string(),
            quote: quote.to_string(),
        }
    }
}

/// Body of `POST /enroll-request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub course_id: u64,
}

/// Generic `{success: bool}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /lesson/{id}/complete`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonCompletion {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Course progress percentage after completing the lesson.
    #[serde(default)]
    pub progress: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_activity_kind_decodes_as_other() {
        let json = r#"[
            {"type": "lesson_completed", "description": "Finished Loops", "time": "2 hours ago"},
            {"type": "quiz_passed", "description": "Passed quiz", "time": "1 day ago"}
        ]"#;
        let activities: Activities = serde_json::from_str(json).unwrap();
        assert_eq!(activities[0].kind, ActivityKind::LessonCompleted);
        assert_eq!(activities[1].kind, ActivityKind::Other);
    }

    #[test]
    fn test_activity_accepts_timestamp_field() {
        let json = r#"{"icon": "fa-trophy", "description": "Earned a badge", "timestamp": "1 day ago"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.kind, ActivityKind::Other);
        assert_eq!(activity.time_label, "1 day ago");
    }

    #[test]
    fn test_stats_decode_from_object() {
        let stats: Stats =
            serde_json::from_str(r#"{"courses_enrolled": 5, "points": 2450}"#).unwrap();
        assert_eq!(stats.get("points"), Some(2450));
        assert_eq!(stats.get("achievements"), None);
    }

    #[test]
    fn test_lesson_completion_without_progress() {
        let done: LessonCompletion =
            serde_json::from_str(r#"{"success": true, "message": "Lesson completed"}"#).unwrap();
        assert!(done.success);
        assert_eq!(done.progress, None);
    }
}
