//! Console output for the one-shot commands and session lifecycle.
//!
//! Every line starts with a colored tag so that `enroll`, `complete-lesson`
//! and `prefs` output reads the same as the session start/stop banners.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Success,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Success => "OK",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Level::Info => "\x1b[1;36m",
            Level::Warn => "\x1b[1;33m",
            Level::Error => "\x1b[1;31m",
            Level::Success => "\x1b[1;32m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]\x1b[0m", self.ansi(), self.tag())
    }
}

/// Formats one message. Details, when present, follow the title after a dash.
pub fn format_line(level: Level, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", level, title)
    } else {
        format!("{} {} - {}", level, title, details)
    }
}

pub fn emit(level: Level, title: &str, details: &str) {
    println!("{}", format_line(level, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::emit($crate::cli_messages::Level::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::emit($crate::cli_messages::Level::Warn, $title, &format!($($details)*))
    };
}

/// Error lines take an optional plain detail string rather than a format.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::emit($crate::cli_messages::Level::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::emit($crate::cli_messages::Level::Error, $title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::emit($crate::cli_messages::Level::Success, $title, &format!($($details)*))
    };
}
