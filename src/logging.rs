//! Log level handling for the event stream.
//!
//! The threshold comes from `RUST_LOG` and is read once per process.

use log::LevelFilter;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl LogLevel {
    /// Level named by a `RUST_LOG` value such as `debug` or
    /// `academy_dashboard=debug,hyper=info`. Only the first directive counts.
    pub fn from_directive(directive: &str) -> Self {
        directive
            .split(',')
            .next()
            .and_then(|first| first.rsplit('=').next())
            .and_then(|level| level.parse().ok())
            .unwrap_or(LogLevel::Info)
    }

    /// Process-wide threshold taken from `RUST_LOG`.
    pub fn threshold() -> Self {
        static THRESHOLD: OnceLock<LogLevel> = OnceLock::new();
        *THRESHOLD.get_or_init(|| {
            std::env::var("RUST_LOG")
                .map(|value| LogLevel::from_directive(&value))
                .unwrap_or(LogLevel::Info)
        })
    }

    pub fn passes(self, threshold: LogLevel) -> bool {
        self >= threshold
    }

    pub fn is_enabled(self) -> bool {
        self.passes(LogLevel::threshold())
    }
}
