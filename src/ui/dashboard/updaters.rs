//! Dashboard state update logic
//!
//! Maps poll payloads, notices and user actions onto display updates.

use super::state::DashboardState;

use crate::consts::cli_consts::{BADGE_MAX_COUNT, animation};
use crate::events::{Notice, UiMessage};
use crate::i18n::{self, Text, tr};
use crate::models::{Activities, NotificationCheck, PollResult, Stats};
use crate::toast::{ToastKind, ToastSurface};

use std::time::Instant;

impl DashboardState {
    /// Advance to the frame at `now`: drain queued messages, expire toasts
    /// and move the carousel.
    pub fn update(&mut self, now: Instant) {
        self.tick += 1;
        self.now = now;

        while let Some(message) = self.pending_messages.pop_front() {
            self.handle_message(message);
        }

        self.toasts.expire(now);
        self.testimonials.tick(now);

        if now.saturating_duration_since(self.last_advance) >= animation::carousel_auto_advance()
            && self.testimonials.next(now)
        {
            self.last_advance = now;
        }
    }

    /// Process a single message from the pollers.
    fn handle_message(&mut self, message: UiMessage) {
        match message {
            UiMessage::Log(event) => self.add_to_activity_log(event),
            UiMessage::Data(PollResult::Stats(stats)) => self.apply_stats(&stats),
            UiMessage::Data(PollResult::Activities(activities)) => {
                self.apply_activities(activities)
            }
            UiMessage::Data(PollResult::NotificationCheck(check)) => {
                self.apply_notification_check(check)
            }
            UiMessage::Notice(notice) => self.apply_notice(notice),
        }
    }

    /// Retarget every counter that has a value in `stats`. Keys without a
    /// counter are ignored.
    pub fn apply_stats(&mut self, stats: &Stats) {
        let now = self.now;
        for (key, counter) in self.counters.iter_mut() {
            if let Some(value) = stats.get(key) {
                counter.retarget(value, now);
            }
        }
    }

    /// Replace the activity feed wholesale.
    pub fn apply_activities(&mut self, activities: Activities) {
        self.activities = Some(activities);
    }

    pub fn apply_notification_check(&mut self, check: NotificationCheck) {
        if check.is_caught_up() {
            self.set_badge(None);
            self.set_last_announced(None);
            return;
        }
        if !check.has_new {
            return;
        }

        self.set_badge((check.count > 0).then_some(check.count));

        if let Some(count) = check.announcement(self.last_announced()) {
            let message = i18n::new_notifications(self.language, count);
            self.toasts
                .show(ToastSurface::Page, message, ToastKind::Info, self.now);
            self.set_last_announced(Some(count));
        }
    }

    pub fn apply_notice(&mut self, notice: Notice) {
        let (text, kind) = match notice {
            Notice::RefreshSucceeded => (Text::DataRefreshed, ToastKind::Success),
            Notice::RefreshFailed => (Text::RefreshFailed, ToastKind::Error),
        };
        self.toasts.show(
            ToastSurface::Dashboard,
            tr(self.language, text),
            kind,
            self.now,
        );
    }

    /// Badge label, `None` when there is nothing unread.
    pub fn badge_text(&self) -> Option<String> {
        self.badge().map(|count| {
            if count > BADGE_MAX_COUNT {
                format!("{}+", BADGE_MAX_COUNT)
            } else {
                count.to_string()
            }
        })
    }

    /// Show `message` on the dashboard surface, e.g. after a key toggle.
    pub fn notify(&mut self, message: &str, kind: ToastKind) {
        self.toasts
            .show(ToastSurface::Dashboard, message, kind, self.now);
    }

    pub fn next_testimonial(&mut self) {
        if self.testimonials.next(self.now) {
            self.last_advance = self.now;
        }
    }

    /// Jumps to testimonial `k`, counting from zero.
    pub fn show_testimonial(&mut self, k: usize) {
        if self.testimonials.go_to(k, self.now) {
            self.last_advance = self.now;
        }
    }

    pub fn prev_testimonial(&mut self) {
        if self.testimonials.prev(self.now) {
            self.last_advance = self.now;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Theme;
    use crate::environment::Environment;
    use crate::events::{Event, EventType, Notice, UiMessage};
    use crate::i18n::Language;
    use crate::models::{Activity, ActivityKind, NotificationCheck, PollResult, Stats};
    use crate::toast::{ToastKind, ToastSurface};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::{DashboardState, default_testimonials};
    use std::time::{Duration, Instant};

    fn state(start: Instant) -> DashboardState {
        DashboardState::new(
            Environment::Local,
            start,
            UIConfig {
                with_background_color: false,
                theme: Theme::Dark,
                language: Language::En,
                auto_refresh: true,
                testimonials: default_testimonials(),
            },
        )
    }

    /// Value of the counter for `key` at the current frame.
    fn counter(state: &DashboardState, key: &str) -> Option<i64> {
        state
            .counters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, counter)| counter.displayed(state.now))
    }

    fn check(has_new: bool, count: u32) -> NotificationCheck {
        NotificationCheck { has_new, count }
    }

    #[test]
    fn test_counters_land_exactly_on_new_values() {
        let start = Instant::now();
        let mut state = state(start);
        state.apply_stats(&Stats::from([("points", 1250), ("achievements", 7)]));

        state.update(start + Duration::from_millis(500));
        let midway = counter(&state, "points").unwrap();
        assert!(midway > 0 && midway < 1250);

        state.update(start + Duration::from_millis(1000));
        assert_eq!(counter(&state, "points"), Some(1250));
        assert_eq!(counter(&state, "achievements"), Some(7));
    }

    #[test]
    fn test_counter_animates_downwards() {
        let start = Instant::now();
        let mut state = state(start);
        state.apply_stats(&Stats::from([("study_hours", 40)]));
        state.update(start + Duration::from_secs(2));

        state.apply_stats(&Stats::from([("study_hours", 12)]));
        state.update(start + Duration::from_millis(2400));
        let value = counter(&state, "study_hours").unwrap();
        assert!((12..=40).contains(&value));

        state.update(start + Duration::from_secs(3));
        assert_eq!(counter(&state, "study_hours"), Some(12));
    }

    #[test]
    fn test_unknown_stat_keys_are_ignored() {
        let start = Instant::now();
        let mut state = state(start);
        state.apply_stats(&Stats::from([("streak_days", 9)]));
        state.update(start + Duration::from_secs(2));
        assert_eq!(counter(&state, "streak_days"), None);
        assert_eq!(counter(&state, "points"), Some(0));
    }

    #[test]
    fn test_activities_replace_feed_wholesale() {
        let mut state = state(Instant::now());
        state.apply_activities(vec![
            Activity::new(ActivityKind::LessonCompleted, "Loops", "1 hour ago"),
            Activity::new(ActivityKind::CourseEnrolled, "Rust 101", "2 days ago"),
        ]);
        state.apply_activities(vec![]);
        assert_eq!(state.activities, Some(vec![]));
    }

    #[test]
    fn test_badge_absent_for_zero_count() {
        let mut state = state(Instant::now());
        state.apply_notification_check(check(true, 3));
        assert_eq!(state.badge_text().as_deref(), Some("3"));

        state.apply_notification_check(check(false, 0));
        assert_eq!(state.badge_text(), None);

        state.toasts.dismiss_all();
        state.apply_notification_check(check(true, 0));
        assert_eq!(state.badge_text(), None);
        assert!(state.toasts.current(ToastSurface::Page).is_none());
    }

    #[test]
    fn test_badge_caps_large_counts() {
        let mut state = state(Instant::now());
        state.apply_notification_check(check(true, 150));
        assert_eq!(state.badge_text().as_deref(), Some("99+"));
        state.apply_notification_check(check(true, 99));
        assert_eq!(state.badge_text().as_deref(), Some("99"));
    }

    #[test]
    fn test_notification_toast_not_repeated_for_same_count() {
        let start = Instant::now();
        let mut state = state(start);
        state.apply_notification_check(check(true, 2));
        let toast = state.toasts.current(ToastSurface::Page).unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.message, "You have 2 new notifications");

        state.toasts.dismiss(ToastSurface::Page);
        state.apply_notification_check(check(true, 2));
        assert!(state.toasts.current(ToastSurface::Page).is_none());

        state.apply_notification_check(check(true, 4));
        assert!(state.toasts.current(ToastSurface::Page).is_some());
    }

    #[test]
    fn test_notices_become_translated_dashboard_toasts() {
        let start = Instant::now();
        let mut state = state(start);
        state.language = Language::Ar;
        state.add_message(UiMessage::Notice(Notice::RefreshFailed));
        state.update(start);

        let toast = state.toasts.current(ToastSurface::Dashboard).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "فشل تحديث البيانات");

        // Dashboard toasts go away after 3 seconds
        state.update(start + Duration::from_secs(3));
        assert!(state.toasts.current(ToastSurface::Dashboard).is_none());
    }

    #[test]
    fn test_update_drains_queue_in_order() {
        let start = Instant::now();
        let mut state = state(start);
        state.add_message(UiMessage::Log(Event::user(
            "Refresh requested".to_string(),
            EventType::Refresh,
        )));
        state.add_message(UiMessage::Data(PollResult::Activities(vec![])));
        state.update(start);

        assert!(state.pending_messages.is_empty());
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.activities, Some(vec![]));
    }

    #[test]
    fn test_carousel_auto_advances_and_manual_navigation_resets_timer() {
        let start = Instant::now();
        let mut state = state(start);

        state.update(start + Duration::from_secs(6));
        assert_eq!(state.testimonials.index(), 1);

        // Still animating, so a manual move is rejected
        state.next_testimonial();
        assert_eq!(state.testimonials.index(), 1);

        state.update(start + Duration::from_secs(7));
        state.prev_testimonial();
        assert_eq!(state.testimonials.index(), 0);

        // Auto-advance waits a full period after the manual move
        state.update(start + Duration::from_secs(12));
        assert_eq!(state.testimonials.index(), 0);
        state.update(start + Duration::from_secs(13));
        assert_eq!(state.testimonials.index(), 1);
    }

    #[test]
    fn test_jump_to_testimonial() {
        let start = Instant::now();
        let mut state = state(start);
        state.show_testimonial(2);
        assert_eq!(state.testimonials.index(), 2);

        state.update(start + Duration::from_secs(1));
        state.show_testimonial(9);
        assert_eq!(state.testimonials.index(), 2);
    }
}
