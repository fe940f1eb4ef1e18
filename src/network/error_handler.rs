//! Centralized error classification for platform requests

use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Maps request failures to the log level they are reported at.
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limiting - low priority
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Session expired or not allowed - the user has to act
            ApiError::Http { status, .. } if *status == 401 => LogLevel::Error,
            ApiError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Payload shape drifted from what the dashboard understands
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            e if e.is_network_failure() => LogLevel::Warn,

            _ => LogLevel::Warn,
        }
    }
}
