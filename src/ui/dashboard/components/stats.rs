//! Stat counters panel

use super::super::state::DashboardState;
use super::super::utils::palette;
use crate::i18n::{Text, stat_label, tr};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_stats_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let colors = palette(state.theme);

    let lines: Vec<Line> = state
        .counters
        .iter()
        .map(|(key, counter)| {
            let value_style = if counter.is_animating(state.now) {
                Style::default().fg(colors.accent)
            } else {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", stat_label(state.language, key)),
                    Style::default().fg(colors.muted),
                ),
                Span::styled(counter.displayed(state.now).to_string(), value_style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(tr(state.language, Text::StatsTitle))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.accent))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
