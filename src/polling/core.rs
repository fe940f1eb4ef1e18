//! Core poller utilities

use super::PollName;
use crate::events::{Event, EventType, Notice, UiMessage};
use crate::logging::LogLevel;
use crate::models::PollResult;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Common message sending utilities for poll tasks
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<UiMessage>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<UiMessage>) -> Self {
        Self { sender }
    }

    /// Send a generic message
    pub async fn send_message(&self, message: UiMessage) {
        let _ = self.sender.send(message).await;
    }

    pub async fn send_poll_event(
        &self,
        name: PollName,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_message(UiMessage::Log(Event::poller_with_level(
            name, message, event_type, log_level,
        )))
        .await;
    }

    pub async fn send_data(&self, result: PollResult) {
        self.send_message(UiMessage::Data(result)).await;
    }

    pub async fn send_notice(&self, notice: Notice) {
        self.send_message(UiMessage::Notice(notice)).await;
    }
}

/// Names whose request is currently outstanding.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    inner: Arc<Mutex<HashSet<PollName>>>,
}

impl InFlight {
    /// Marks `name` as in flight, or returns `None` if it already is.
    pub fn try_acquire(&self, name: PollName) -> Option<InFlightGuard> {
        let mut set = self.inner.lock().ok()?;
        if !set.insert(name) {
            return None;
        }
        Some(InFlightGuard {
            inner: Arc::clone(&self.inner),
            name,
        })
    }

    pub fn is_in_flight(&self, name: PollName) -> bool {
        self.inner
            .lock()
            .map(|set| set.contains(&name))
            .unwrap_or(false)
    }
}

/// Clears the in-flight mark when dropped, including when the request task is aborted.
#[derive(Debug)]
pub struct InFlightGuard {
    inner: Arc<Mutex<HashSet<PollName>>>,
    name: PollName,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Ok(mut set) = self.inner.lock() {
            set.remove(&self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_until_guard_dropped() {
        let in_flight = InFlight::default();
        let guard = in_flight.try_acquire(PollName::Stats).unwrap();
        assert!(in_flight.try_acquire(PollName::Stats).is_none());
        // Other names are independent
        assert!(in_flight.try_acquire(PollName::Activities).is_some());

        drop(guard);
        assert!(!in_flight.is_in_flight(PollName::Stats));
        assert!(in_flight.try_acquire(PollName::Stats).is_some());
    }
}
