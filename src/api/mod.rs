use crate::api::error::ApiError;
use crate::models::{
    Acknowledgement, Activities, EnrollmentRequest, LessonCompletion, NotificationCheck, Stats,
};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Relative paths of the platform endpoints the client consumes.
pub mod endpoints {
    pub const USER_STATS: &str = "api/user-stats";
    pub const RECENT_ACTIVITIES: &str = "api/recent-activities";
    pub const NOTIFICATIONS_CHECK: &str = "api/notifications/check";
    pub const ENROLL_REQUEST: &str = "enroll-request";

    pub fn lesson_complete(lesson_id: u64) -> String {
        format!("lesson/{}/complete", lesson_id)
    }
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PlatformApi: Send + Sync {
    /// Fetch the current user's statistics.
    async fn user_stats(&self) -> Result<Stats, ApiError>;

    /// Fetch the recent activity feed, most recent first.
    async fn recent_activities(&self) -> Result<Activities, ApiError>;

    /// Ask whether unread notifications exist.
    async fn check_notifications(&self) -> Result<NotificationCheck, ApiError>;

    /// Post an enrollment request for a course.
    async fn submit_enrollment(
        &self,
        request: &EnrollmentRequest,
    ) -> Result<Acknowledgement, ApiError>;

    /// Mark a lesson as completed.
    async fn complete_lesson(&self, lesson_id: u64) -> Result<LessonCompletion, ApiError>;
}
