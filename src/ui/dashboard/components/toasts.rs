//! Toast overlay
//!
//! Draws the visible toasts stacked in the top-right corner over the rest of
//! the dashboard.

use super::super::state::DashboardState;
use super::super::utils::toast_color;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub fn render_toasts(f: &mut Frame, area: Rect, state: &DashboardState) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width);

    for (slot, (_, toast)) in state.toasts.visible().into_iter().enumerate() {
        let y = area.y + 1 + slot as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let color = toast_color(toast.kind);

        let widget = Paragraph::new(toast.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(toast.kind.to_string())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
    }
}
