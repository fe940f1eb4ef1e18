//! Lifecycle banners printed around a dashboard session.

use crate::cli_messages::{Level, emit};
use crate::environment::Environment;

pub fn print_session_starting(mode: &str, environment: &Environment) {
    emit(
        Level::Info,
        &format!("Starting {} session", mode),
        &format!("{} ({})", environment, environment.base_url()),
    );
}

pub fn print_timers_armed(count: usize) {
    emit(Level::Info, &format!("{} poll timers armed", count), "");
}

pub fn print_session_shutdown() {
    emit(Level::Info, "Stopping poll timers", "");
}

pub fn print_session_exit_success() {
    emit(Level::Success, "Academy dashboard closed", "");
}
