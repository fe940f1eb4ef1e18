//! Headless mode execution

use super::{
    SessionData,
    messages::{
        print_session_exit_success, print_session_shutdown, print_session_starting,
        print_timers_armed,
    },
};
use crate::events::{Notice, UiMessage};
use crate::i18n::{self, Language, Text, stat_label, tr};
use crate::models::PollResult;
use std::error::Error;

/// Turns poller messages into console lines.
///
/// Remembers the last announced notification count so an unchanged count is
/// printed once, like the dashboard toast.
#[derive(Debug)]
pub struct ConsoleFeed {
    language: Language,
    last_announced: Option<u32>,
}

impl ConsoleFeed {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            last_announced: None,
        }
    }

    /// One console line for `message`, or `None` if it is not shown.
    pub fn describe(&mut self, message: &UiMessage) -> Option<String> {
        let language = self.language;
        match message {
            UiMessage::Log(event) => event.should_display().then(|| event.to_string()),
            UiMessage::Data(PollResult::Stats(stats)) => Some(
                stats
                    .iter()
                    .map(|(key, value)| format!("{}: {}", stat_label(language, key), value))
                    .collect::<Vec<_>>()
                    .join(" | "),
            ),
            UiMessage::Data(PollResult::Activities(activities)) if activities.is_empty() => {
                Some(tr(language, Text::NoRecentActivity).to_string())
            }
            UiMessage::Data(PollResult::Activities(activities)) => Some(
                activities
                    .iter()
                    .map(|activity| format!("  - {}", activity))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            UiMessage::Data(PollResult::NotificationCheck(check)) => {
                if check.is_caught_up() {
                    self.last_announced = None;
                }
                let count = check.announcement(self.last_announced)?;
                self.last_announced = Some(count);
                Some(i18n::new_notifications(language, count))
            }
            UiMessage::Notice(Notice::RefreshSucceeded) => {
                Some(tr(language, Text::DataRefreshed).to_string())
            }
            UiMessage::Notice(Notice::RefreshFailed) => {
                Some(tr(language, Text::RefreshFailed).to_string())
            }
        }
    }
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console logging of events and payload summaries
/// 2. Ctrl+C shutdown handling
/// 3. Event loop management
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);
    print_timers_armed(session.poller.armed_count());

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut feed = ConsoleFeed::new(session.preferences.language);

    // Event loop: log messages to console until shutdown
    loop {
        tokio::select! {
            Some(message) = session.message_receiver.recv() => {
                if let Some(line) = feed.describe(&message) {
                    println!("{}", line);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.poller.stop();
    print_session_exit_success();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationCheck, Stats};

    #[test]
    fn test_empty_activities_print_placeholder() {
        let message = UiMessage::Data(PollResult::Activities(vec![]));
        assert_eq!(
            ConsoleFeed::new(Language::En).describe(&message).as_deref(),
            Some("No recent activity")
        );
    }

    #[test]
    fn test_quiet_notification_check_prints_nothing() {
        let message = UiMessage::Data(PollResult::NotificationCheck(NotificationCheck {
            has_new: false,
            count: 0,
        }));
        assert_eq!(ConsoleFeed::new(Language::En).describe(&message), None);
    }

    #[test]
    fn test_unchanged_notification_count_printed_once() {
        let mut feed = ConsoleFeed::new(Language::En);
        let check = |has_new, count| {
            UiMessage::Data(PollResult::NotificationCheck(NotificationCheck { has_new, count }))
        };

        assert_eq!(
            feed.describe(&check(true, 3)).as_deref(),
            Some("You have 3 new notifications")
        );
        assert_eq!(feed.describe(&check(true, 3)), None);
        assert!(feed.describe(&check(true, 4)).is_some());

        // Once caught up, the same count is news again
        assert_eq!(feed.describe(&check(false, 0)), None);
        assert!(feed.describe(&check(true, 4)).is_some());
    }

    #[test]
    fn test_stats_summary_uses_labels() {
        let message = UiMessage::Data(PollResult::Stats(Stats::from([("points", 40)])));
        assert_eq!(
            ConsoleFeed::new(Language::En).describe(&message).as_deref(),
            Some("Points: 40")
        );
    }
}
