//! Startup screen shown while the first poll results arrive.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const LOGO: &str = r#"
   █████╗    ██████╗   █████╗   ██████╗   ███████╗  ███╗   ███╗  ██╗   ██╗
  ██╔══██╗  ██╔════╝  ██╔══██╗  ██╔══██╗  ██╔════╝  ████╗ ████║  ╚██╗ ██╔╝
  ███████║  ██║       ███████║  ██║  ██║  █████╗    ██╔████╔██║   ╚████╔╝
  ██╔══██║  ██║       ██╔══██║  ██║  ██║  ██╔══╝    ██║╚██╔╝██║    ╚██╔╝
  ██║  ██║  ╚██████╗  ██║  ██║  ██████╔╝  ███████╗  ██║ ╚═╝ ██║     ██║
  ╚═╝  ╚═╝   ╚═════╝  ╚═╝  ╚═╝  ╚═════╝   ╚══════╝  ╚═╝     ╚═╝     ╚═╝
"#;

fn splash_lines() -> Vec<Line<'static>> {
    let logo_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = LOGO
        .trim_matches('\n')
        .lines()
        .map(|row| Line::styled(row, logo_style))
        .collect();

    lines.push(Line::default());
    lines.push(Line::from("Learning dashboard").gray());
    lines.push(Line::from(format!("v{}", env!("CARGO_PKG_VERSION"))).light_blue().italic());
    lines.push(Line::default());
    lines.push(Line::from("press any key to continue").dark_gray());
    lines
}

pub fn render_splash(f: &mut Frame) {
    let lines = splash_lines();
    let height = lines.len() as u16;
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
