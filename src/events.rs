//! Event System
//!
//! Messages flowing from the pollers to the single UI dispatcher, and the
//! log events shown in the dashboard's activity log.

use crate::logging::LogLevel;
use crate::models::PollResult;
use crate::polling::PollName;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// One of the named poll timers.
    Poller(PollName),
    /// A user action (key press or command).
    User,
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Poller(name) => write!(f, "{}", name),
            Source::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn poller_with_level(
        name: PollName,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(Source::Poller(name), msg, event_type, log_level)
    }

    pub fn user(msg: String, event_type: EventType) -> Self {
        Self::new(Source::User, msg, event_type, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        self.log_level.is_enabled()
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

/// Outcome of a user-visible refresh, translated by the UI into a toast.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Notice {
    RefreshSucceeded,
    RefreshFailed,
}

/// Everything the dispatcher loop receives from background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    Log(Event),
    Data(PollResult),
    Notice(Notice),
}
