//! Named interval timers with in-flight de-duplication

use super::core::{EventSender, InFlight};
use super::{PollName, PollSchedule};
use crate::api::PlatformApi;
use crate::api::error::ApiError;
use crate::events::{EventType, Notice};
use crate::logging::LogLevel;
use crate::models::PollResult;
use crate::network::ErrorHandler;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// What started a poll.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Trigger {
    Timer,
    Manual,
}

/// Everything a spawned poll needs, cloned into each timer task.
#[derive(Clone)]
struct PollTask {
    api: Arc<dyn PlatformApi>,
    events: EventSender,
    in_flight: InFlight,
    error_handler: ErrorHandler,
}

impl PollTask {
    /// Starts one request for `name` unless the previous one is still outstanding.
    fn dispatch(&self, name: PollName, trigger: Trigger) {
        let guard = self.in_flight.try_acquire(name);
        let task = self.clone();
        tokio::spawn(async move {
            match guard {
                Some(_guard) => task.run(name, trigger).await,
                None => {
                    task.events
                        .send_poll_event(
                            name,
                            "Previous request still in flight, skipping tick".to_string(),
                            EventType::Skipped,
                            LogLevel::Debug,
                        )
                        .await
                }
            }
        });
    }

    async fn run(&self, name: PollName, trigger: Trigger) {
        match name {
            PollName::Stats => {
                let result = self.api.user_stats().await.map(PollResult::Stats);
                self.deliver(name, result).await;
            }
            PollName::Activities => {
                let result = self
                    .api
                    .recent_activities()
                    .await
                    .map(PollResult::Activities);
                self.deliver(name, result).await;
            }
            PollName::Notifications => {
                let result = self
                    .api
                    .check_notifications()
                    .await
                    .map(PollResult::NotificationCheck);
                self.deliver(name, result).await;
            }
            PollName::FullRefresh => self.refresh_all(trigger).await,
        }
    }

    /// Routine polls: forward the payload, or log and swallow the failure.
    async fn deliver(&self, name: PollName, result: Result<PollResult, ApiError>) -> bool {
        match result {
            Ok(payload) => {
                self.events.send_data(payload).await;
                self.events
                    .send_poll_event(
                        name,
                        format!("Fetched {}", name),
                        EventType::Refresh,
                        LogLevel::Debug,
                    )
                    .await;
                true
            }
            Err(e) => {
                let log_level = self.error_handler.classify_error(&e);
                self.events
                    .send_poll_event(
                        name,
                        format!("Failed to fetch {}: {}", name, e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                false
            }
        }
    }

    async fn refresh_all(&self, trigger: Trigger) {
        let (stats, activities) =
            tokio::join!(self.api.user_stats(), self.api.recent_activities());
        let name = PollName::FullRefresh;
        let stats_ok = self.deliver(name, stats.map(PollResult::Stats)).await;
        let activities_ok = self
            .deliver(name, activities.map(PollResult::Activities))
            .await;

        if stats_ok && activities_ok {
            self.events
                .send_poll_event(
                    name,
                    "Dashboard refreshed".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                )
                .await;
            if trigger == Trigger::Manual {
                self.events.send_notice(Notice::RefreshSucceeded).await;
            }
        } else {
            self.events.send_notice(Notice::RefreshFailed).await;
        }
    }
}

/// Owns the named poll timers. Dropping the poller aborts all of them.
pub struct Poller {
    task: PollTask,
    schedule: PollSchedule,
    timers: HashMap<PollName, JoinHandle<()>>,
    auto_refresh: bool,
}

impl Poller {
    pub fn new(
        api: Arc<dyn PlatformApi>,
        events: EventSender,
        schedule: PollSchedule,
        auto_refresh: bool,
    ) -> Self {
        Self {
            task: PollTask {
                api,
                events,
                in_flight: InFlight::default(),
                error_handler: ErrorHandler::new(),
            },
            schedule,
            timers: HashMap::new(),
            auto_refresh,
        }
    }

    /// Arms the routine timers, and the full refresh when auto-refresh is on.
    pub fn start(&mut self) {
        for name in PollName::ROUTINE {
            self.arm(name);
        }
        if self.auto_refresh {
            self.arm(PollName::FullRefresh);
        }
    }

    /// Arms or disarms the full-refresh timer.
    pub fn set_auto_refresh_enabled(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
        if enabled {
            self.arm(PollName::FullRefresh);
        } else {
            self.disarm(PollName::FullRefresh);
        }
    }

    pub fn auto_refresh_enabled(&self) -> bool {
        self.auto_refresh
    }

    /// Whether a full refresh, manual or automatic, is outstanding.
    pub fn is_refreshing(&self) -> bool {
        self.task.in_flight.is_in_flight(PollName::FullRefresh)
    }

    /// One immediate fetch of every routine endpoint, for the first paint.
    pub fn load_initial(&self) {
        for name in PollName::ROUTINE {
            self.task.dispatch(name, Trigger::Timer);
        }
    }

    /// Manual "refresh all"; shares the full-refresh in-flight slot with the timer.
    pub fn refresh_all(&self) {
        self.task.dispatch(PollName::FullRefresh, Trigger::Manual);
    }

    /// (Re)arms the timer for `name`. The previous timer, if any, is aborted first
    /// so there is never more than one per name.
    pub fn arm(&mut self, name: PollName) {
        self.disarm(name);
        let period = self.schedule.interval(name);
        let task = self.task.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                task.dispatch(name, Trigger::Timer);
            }
        });
        self.timers.insert(name, handle);
    }

    pub fn disarm(&mut self, name: PollName) {
        if let Some(handle) = self.timers.remove(&name) {
            handle.abort();
        }
    }

    pub fn is_armed(&self, name: PollName) -> bool {
        self.timers
            .get(&name)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn armed_count(&self) -> usize {
        self.timers.values().filter(|h| !h.is_finished()).count()
    }

    pub fn stop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPlatformApi;
    use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, polling};
    use crate::events::UiMessage;
    use crate::models::{
        Acknowledgement, Activities, EnrollmentRequest, LessonCompletion, NotificationCheck, Stats,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        }
    }

    fn poller_with(api: impl PlatformApi + 'static, auto_refresh: bool) -> (Poller, mpsc::Receiver<UiMessage>) {
        let (tx, rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let poller = Poller::new(
            Arc::new(api),
            EventSender::new(tx),
            PollSchedule::default(),
            auto_refresh,
        );
        (poller, rx)
    }

    fn drain(rx: &mut mpsc::Receiver<UiMessage>) -> Vec<UiMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    async fn next_notice(rx: &mut mpsc::Receiver<UiMessage>) -> Option<Notice> {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                match rx.recv().await {
                    Some(UiMessage::Notice(notice)) => return Some(notice),
                    Some(_) => continue,
                    None => return None,
                }
            }
        })
        .await
        .ok()
        .flatten()
    }

    /// Mock whose activity fetches are counted.
    fn counting_api(activity_calls: Arc<AtomicUsize>) -> MockPlatformApi {
        let mut api = MockPlatformApi::new();
        api.expect_user_stats().returning(|| Ok(Stats::default()));
        api.expect_recent_activities().returning(move || {
            activity_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        });
        api
    }

    #[tokio::test(start_paused = true)]
    /// Re-arming the auto-refresh twice must not leave two full-refresh intervals running.
    async fn test_rearming_auto_refresh_keeps_single_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut poller, _rx) = poller_with(counting_api(calls.clone()), false);

        poller.set_auto_refresh_enabled(true);
        poller.set_auto_refresh_enabled(true);
        assert_eq!(poller.armed_count(), 1);

        tokio::time::sleep(polling::full_refresh_interval() * 3 + Duration::from_secs(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    /// Disabling auto-refresh stops the full-refresh timer.
    async fn test_disabling_auto_refresh_disarms_timer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut poller, _rx) = poller_with(counting_api(calls.clone()), true);

        poller.set_auto_refresh_enabled(true);
        poller.set_auto_refresh_enabled(false);
        assert!(!poller.is_armed(PollName::FullRefresh));
        assert!(!poller.auto_refresh_enabled());

        tokio::time::sleep(polling::full_refresh_interval() * 2 + Duration::from_secs(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    /// Start arms the routine timers and the full refresh only when enabled.
    async fn test_start_respects_auto_refresh_toggle() {
        let (mut poller, _rx) = poller_with(MockPlatformApi::new(), false);
        poller.start();
        assert_eq!(poller.armed_count(), 3);
        assert!(!poller.is_armed(PollName::FullRefresh));

        let (mut poller, _rx) = poller_with(MockPlatformApi::new(), true);
        poller.start();
        assert_eq!(poller.armed_count(), 4);
        assert!(poller.is_armed(PollName::FullRefresh));

        poller.stop();
        assert_eq!(poller.armed_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    /// A failing routine poll is logged, never toasted, and keeps its timer armed.
    async fn test_routine_failure_is_logged_and_swallowed() {
        let mut api = MockPlatformApi::new();
        api.expect_check_notifications()
            .returning(|| Err(server_error()));
        let (mut poller, mut rx) = poller_with(api, false);
        poller.arm(PollName::Notifications);

        tokio::time::sleep(polling::notifications_interval() * 2 + Duration::from_secs(1)).await;

        let messages = drain(&mut rx);
        let errors = messages
            .iter()
            .filter(|m| matches!(m, UiMessage::Log(e) if e.event_type == EventType::Error && e.log_level == LogLevel::Warn))
            .count();
        assert_eq!(errors, 2);
        assert!(!messages.iter().any(|m| matches!(m, UiMessage::Notice(_))));
        assert!(poller.is_armed(PollName::Notifications));
    }

    #[tokio::test(start_paused = true)]
    /// Successful routine polls forward their payload to the dispatcher.
    async fn test_routine_success_forwards_payload() {
        let mut api = MockPlatformApi::new();
        api.expect_check_notifications().returning(|| {
            Ok(NotificationCheck {
                has_new: true,
                count: 3,
            })
        });
        let (mut poller, mut rx) = poller_with(api, false);
        poller.arm(PollName::Notifications);

        tokio::time::sleep(polling::notifications_interval() + Duration::from_secs(1)).await;

        let messages = drain(&mut rx);
        assert!(messages.contains(&UiMessage::Data(PollResult::NotificationCheck(
            NotificationCheck {
                has_new: true,
                count: 3
            }
        ))));
    }

    #[tokio::test(start_paused = true)]
    /// A failed manual refresh surfaces a notice for the user.
    async fn test_manual_refresh_failure_raises_notice() {
        let mut api = MockPlatformApi::new();
        api.expect_user_stats().returning(|| Err(server_error()));
        api.expect_recent_activities().returning(|| Ok(Vec::new()));
        let (poller, mut rx) = poller_with(api, false);

        poller.refresh_all();
        assert_eq!(next_notice(&mut rx).await, Some(Notice::RefreshFailed));
    }

    #[tokio::test(start_paused = true)]
    /// A successful manual refresh delivers both payloads and a success notice.
    async fn test_manual_refresh_success() {
        let mut api = MockPlatformApi::new();
        api.expect_user_stats()
            .returning(|| Ok(Stats::from([("points", 10)])));
        api.expect_recent_activities().returning(|| Ok(Vec::new()));
        let (poller, mut rx) = poller_with(api, false);

        poller.refresh_all();
        assert_eq!(next_notice(&mut rx).await, Some(Notice::RefreshSucceeded));
        let messages = drain(&mut rx);
        assert!(!messages.iter().any(|m| matches!(m, UiMessage::Notice(_))));
    }

    #[tokio::test(start_paused = true)]
    /// The initial load hits every routine endpoint once without waiting for a tick.
    async fn test_load_initial_fetches_routine_endpoints() {
        let mut api = MockPlatformApi::new();
        api.expect_user_stats()
            .times(1)
            .returning(|| Ok(Stats::from([("points", 5)])));
        api.expect_recent_activities()
            .times(1)
            .returning(|| Ok(Vec::new()));
        api.expect_check_notifications()
            .times(1)
            .returning(|| Ok(NotificationCheck::default()));
        let (poller, mut rx) = poller_with(api, false);

        poller.load_initial();
        tokio::time::sleep(Duration::from_secs(1)).await;

        let payloads = drain(&mut rx)
            .into_iter()
            .filter(|m| matches!(m, UiMessage::Data(_)))
            .count();
        assert_eq!(payloads, 3);
        assert_eq!(poller.armed_count(), 0);
    }

    /// Fake platform whose stats endpoint answers slowly.
    struct SlowStatsApi {
        calls: Arc<AtomicUsize>,
        delay: Duration,
    }

    #[async_trait::async_trait]
    impl PlatformApi for SlowStatsApi {
        async fn user_stats(&self) -> Result<Stats, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(Stats::default())
        }

        async fn recent_activities(&self) -> Result<Activities, ApiError> {
            Err(server_error())
        }

        async fn check_notifications(&self) -> Result<NotificationCheck, ApiError> {
            Err(server_error())
        }

        async fn submit_enrollment(
            &self,
            _request: &EnrollmentRequest,
        ) -> Result<Acknowledgement, ApiError> {
            Err(server_error())
        }

        async fn complete_lesson(&self, _lesson_id: u64) -> Result<LessonCompletion, ApiError> {
            Err(server_error())
        }
    }

    #[tokio::test(start_paused = true)]
    /// Ticks that fire while the previous request is outstanding are skipped.
    async fn test_slow_request_suppresses_duplicate_ticks() {
        let calls = Arc::new(AtomicUsize::new(0));
        let api = SlowStatsApi {
            calls: calls.clone(),
            delay: Duration::from_secs(12 * 60),
        };
        let (mut poller, mut rx) = poller_with(api, false);
        poller.arm(PollName::Stats);

        // Ticks at 5m (starts request until 17m), 10m and 15m (skipped)
        tokio::time::sleep(Duration::from_secs(16 * 60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let skipped = drain(&mut rx)
            .iter()
            .filter(|m| matches!(m, UiMessage::Log(e) if e.event_type == EventType::Skipped))
            .count();
        assert_eq!(skipped, 2);

        // Tick at 20m runs again once the first request resolved
        tokio::time::sleep(Duration::from_secs(5 * 60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
