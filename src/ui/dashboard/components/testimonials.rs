//! Testimonials carousel panel

use super::super::state::DashboardState;
use super::super::utils::palette;
use crate::i18n::{Text, tr};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_testimonials_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let colors = palette(state.theme);
    let carousel = &state.testimonials;

    // The active slide fades in while its transition runs
    let quote_style = match carousel.transition_progress(state.now) {
        Some(p) if carousel.is_busy() && p < 0.5 => Style::default().fg(colors.muted),
        _ => Style::default().fg(colors.text),
    };

    let mut lines = Vec::new();
    if let Some(testimonial) = carousel.current() {
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", testimonial.quote),
            quote_style.add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("- {}, {}", testimonial.author, testimonial.course),
            Style::default().fg(colors.accent),
        )));
    }

    // Dots come from the same index as the slide
    let dots: Vec<Span> = (0..carousel.len())
        .map(|i| {
            if i == carousel.index() {
                Span::styled("● ", Style::default().fg(colors.highlight))
            } else if carousel.leaving() == Some(i) {
                Span::styled("◌ ", Style::default().fg(colors.muted))
            } else {
                Span::styled("○ ", Style::default().fg(colors.muted))
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(dots).alignment(Alignment::Center));

    let block = Block::default()
        .title(tr(state.language, Text::TestimonialsTitle))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.accent))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
