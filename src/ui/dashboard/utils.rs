//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::config::Theme;
use crate::events::Source;
use crate::models::ActivityKind;
use crate::toast::ToastKind;
use ratatui::prelude::Color;

/// Icon shown next to an activity feed entry.
pub fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::LessonCompleted => "✅",
        ActivityKind::CourseEnrolled => "📚",
        ActivityKind::AchievementEarned => "🏆",
        ActivityKind::Other => "•",
    }
}

/// Colors of one theme.
#[derive(Debug, Copy, Clone)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: Color::Rgb(16, 20, 24),
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            highlight: Color::LightYellow,
        },
        Theme::Light => Palette {
            background: Color::Rgb(245, 245, 240),
            text: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            highlight: Color::Magenta,
        },
    }
}

pub fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Info => Color::Cyan,
        ToastKind::Warning => Color::Yellow,
    }
}

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Poller(_) => Color::Cyan,
        Source::User => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("connect") {
        return "Server unreachable - will retry on next tick".to_string();
    }
    if msg.contains("timed out") {
        return "Request timed out - will retry on next tick".to_string();
    }
    msg.to_string()
}
