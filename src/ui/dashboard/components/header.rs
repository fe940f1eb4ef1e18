//! Dashboard header component
//!
//! Renders the title, notification badge and auto-refresh status

use super::super::state::DashboardState;
use super::super::utils::palette;
use crate::i18n::{Text, tr};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let colors = palette(state.theme);
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let mut title_spans = vec![Span::styled(
        format!("ACADEMY DASHBOARD v{}", version),
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(badge) = state.badge_text() {
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(
            format!(" 🔔 {} ", badge),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let title = Paragraph::new(Line::from(title_spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (refresh_text, refresh_color) = if state.auto_refresh {
        (tr(state.language, Text::AutoRefreshOn), Color::LightGreen)
    } else {
        (tr(state.language, Text::AutoRefreshOff), Color::DarkGray)
    };
    let uptime = state.now.saturating_duration_since(state.start_time).as_secs();
    let status = Paragraph::new(Line::from(vec![
        Span::styled(refresh_text, Style::default().fg(refresh_color)),
        Span::styled(
            format!(
                " | {} | {} | {} | up {:02}:{:02}:{:02}",
                state.environment,
                state.language,
                state.theme,
                uptime / 3600,
                (uptime % 3600) / 60,
                uptime % 60
            ),
            Style::default().fg(colors.muted),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors.muted)),
    );
    f.render_widget(status, header_chunks[1]);
}
