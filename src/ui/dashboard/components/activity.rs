//! Recent activity feed

use super::super::state::DashboardState;
use super::super::utils::{activity_icon, palette};
use crate::i18n::{Text, tr};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_activity_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let colors = palette(state.theme);

    let lines: Vec<Line> = match &state.activities {
        None => vec![Line::from(Span::styled(
            tr(state.language, Text::Loading),
            Style::default().fg(colors.muted),
        ))],
        Some(activities) if activities.is_empty() => vec![Line::from(Span::styled(
            tr(state.language, Text::NoRecentActivity),
            Style::default().fg(colors.muted),
        ))],
        Some(activities) => activities
            .iter()
            .map(|activity| {
                Line::from(vec![
                    Span::raw(format!("{} ", activity_icon(activity.kind))),
                    Span::styled(activity.description.clone(), Style::default().fg(colors.text)),
                    Span::styled(
                        format!("  {}", activity.time_label),
                        Style::default().fg(colors.muted),
                    ),
                ])
            })
            .collect(),
    };

    let block = Block::default()
        .title(tr(state.language, Text::ActivityTitle))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.accent))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
