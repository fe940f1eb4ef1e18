//! Event log panel: poll outcomes and user actions, newest first

use super::super::state::DashboardState;
use super::super::utils::{
    clean_http_error_message, format_compact_timestamp, get_source_color, palette,
};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn event_icon(event: &Event) -> &'static str {
    match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Error) => "❌",
        (EventType::Error, _) => "⚠",
        (EventType::Refresh, _) => "↻",
        (EventType::Skipped, _) => "·",
    }
}

fn event_line(event: &Event) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", event_icon(event))),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("[{}] ", event.source),
            Style::default().fg(get_source_color(&event.source)),
        ),
        Span::raw(clean_http_error_message(&event.msg)),
    ])
}

pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    // Two border rows plus one spare for wrapping
    let visible = usize::from(area.height.saturating_sub(3)).max(1);

    let mut lines: Vec<Line> = state
        .activity_logs
        .iter()
        .rev()
        .filter(|event| event.should_display())
        .take(visible)
        .map(event_line)
        .collect();
    if lines.is_empty() {
        lines.push(Line::from("Waiting for the first poll..."));
    }

    let block = Block::default()
        .title(format!("EVENT LOG ({})", state.activity_logs.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette(state.theme).accent))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
