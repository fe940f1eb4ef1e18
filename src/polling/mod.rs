//! Dashboard polling
//!
//! Named interval timers that fetch from the platform's read endpoints and
//! forward payloads to the UI dispatcher.

pub mod core;
pub mod poller;

pub use poller::{Poller, Trigger};

use crate::consts::cli_consts::polling;
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PollName {
    /// `GET /api/user-stats`
    Stats,
    /// `GET /api/recent-activities`
    Activities,
    /// `GET /api/notifications/check`
    Notifications,
    /// Stats and activities together, gated by the auto-refresh toggle.
    FullRefresh,
}

impl PollName {
    /// Timers armed unconditionally at session start.
    pub const ROUTINE: [PollName; 3] = [
        PollName::Stats,
        PollName::Activities,
        PollName::Notifications,
    ];
}

impl Display for PollName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollName::Stats => write!(f, "stats"),
            PollName::Activities => write!(f, "activities"),
            PollName::Notifications => write!(f, "notifications"),
            PollName::FullRefresh => write!(f, "full-refresh"),
        }
    }
}

/// Interval of each named timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSchedule {
    intervals: HashMap<PollName, Duration>,
}

impl PollSchedule {
    pub fn interval(&self, name: PollName) -> Duration {
        self.intervals
            .get(&name)
            .copied()
            .unwrap_or_else(polling::full_refresh_interval)
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            intervals: HashMap::from([
                (PollName::Stats, polling::stats_interval()),
                (PollName::Activities, polling::activities_interval()),
                (PollName::Notifications, polling::notifications_interval()),
                (PollName::FullRefresh, polling::full_refresh_interval()),
            ]),
        }
    }
}
