pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Poll intervals, animation timings and display limits, grouped by the
    //! part of the client that consumes them.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel feeding the UI dispatcher
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Poll intervals for each named timer
    pub mod polling {
        use std::time::Duration;

        /// User statistics refresh (5 minutes)
        pub const STATS_INTERVAL_SECS: u64 = 5 * 60;

        /// Recent activity refresh (2 minutes)
        pub const ACTIVITIES_INTERVAL_SECS: u64 = 2 * 60;

        /// Notification check (1 minute)
        pub const NOTIFICATIONS_INTERVAL_SECS: u64 = 60;

        /// Full dashboard refresh, only while auto-refresh is enabled (10 minutes)
        pub const FULL_REFRESH_INTERVAL_SECS: u64 = 10 * 60;

        pub const fn stats_interval() -> Duration {
            Duration::from_secs(STATS_INTERVAL_SECS)
        }

        pub const fn activities_interval() -> Duration {
            Duration::from_secs(ACTIVITIES_INTERVAL_SECS)
        }

        pub const fn notifications_interval() -> Duration {
            Duration::from_secs(NOTIFICATIONS_INTERVAL_SECS)
        }

        pub const fn full_refresh_interval() -> Duration {
            Duration::from_secs(FULL_REFRESH_INTERVAL_SECS)
        }
    }

    /// HTTP client configuration
    pub mod network {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Counter and carousel animation timings
    pub mod animation {
        use std::time::Duration;

        /// Duration of a stat counter tween
        pub const COUNTER_DURATION_MS: u64 = 1000;

        /// Duration of a testimonial slide transition (exit + enter)
        pub const CAROUSEL_TRANSITION_MS: u64 = 600;

        /// Interval between automatic testimonial advances
        pub const CAROUSEL_AUTO_ADVANCE_SECS: u64 = 6;

        pub const fn counter_duration() -> Duration {
            Duration::from_millis(COUNTER_DURATION_MS)
        }

        pub const fn carousel_transition() -> Duration {
            Duration::from_millis(CAROUSEL_TRANSITION_MS)
        }

        pub const fn carousel_auto_advance() -> Duration {
            Duration::from_secs(CAROUSEL_AUTO_ADVANCE_SECS)
        }
    }

    /// Toast auto-dismiss delays per surface
    pub mod toast {
        use std::time::Duration;

        /// Dashboard refresh results
        pub const DASHBOARD_TTL_MS: u64 = 3000;

        /// Page-level notifications
        pub const PAGE_TTL_MS: u64 = 5000;

        pub const fn dashboard_ttl() -> Duration {
            Duration::from_millis(DASHBOARD_TTL_MS)
        }

        pub const fn page_ttl() -> Duration {
            Duration::from_millis(PAGE_TTL_MS)
        }
    }

    /// Largest notification count shown verbatim on the badge
    pub const BADGE_MAX_COUNT: u32 = 99;

    /// Maximum length of a submitted form field after sanitizing
    pub const MAX_FIELD_LENGTH: usize = 255;

    /// Stat keys that have a counter on the dashboard, in display order
    pub const STAT_COUNTERS: [&str; 4] = ["courses_enrolled", "achievements", "study_hours", "points"];
}
