//! Key binding hints along the bottom edge

use super::super::state::DashboardState;
use super::super::utils::palette;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const KEYBINDS: &[(&str, &str)] = &[
    ("R", "Refresh"),
    ("A", "Auto-refresh"),
    ("T", "Theme"),
    ("L", "Language"),
    ("←/→/1-9", "Testimonials"),
    ("X", "Dismiss"),
    ("Q", "Quit"),
];

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let colors = palette(state.theme);
    let key_style = Style::default()
        .fg(colors.accent)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(colors.text);

    let mut spans = Vec::with_capacity(KEYBINDS.len() * 3);
    for (i, (key, label)) in KEYBINDS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors.muted)));
        }
        spans.push(Span::styled(format!("[{}]", key), key_style));
        spans.push(Span::styled(format!(" {}", label), label_style));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
