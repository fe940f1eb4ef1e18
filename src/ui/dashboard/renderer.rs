//! Dashboard main renderer

use super::components::{activity, footer, header, logs, stats, testimonials, toasts};
use super::state::DashboardState;
use super::utils::palette;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(palette(state.theme).background)),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    stats::render_stats_panel(f, content_chunks[0], state);
    activity::render_activity_panel(f, content_chunks[1], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    testimonials::render_testimonials_panel(f, bottom_chunks[0], state);
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[3], state);

    // Overlay last so toasts sit on top
    toasts::render_toasts(f, f.area(), state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::serve_once;
    use crate::api::{ApiClient, PlatformApi};
    use crate::config::Theme;
    use crate::environment::Environment;
    use crate::events::UiMessage;
    use crate::i18n::Language;
    use crate::models::{NotificationCheck, PollResult};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::default_testimonials;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn render_to_string(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state(language: Language) -> DashboardState {
        DashboardState::new(
            Environment::Production,
            Instant::now(),
            UIConfig {
                with_background_color: true,
                theme: Theme::Light,
                language,
                auto_refresh: false,
                testimonials: default_testimonials(),
            },
        )
    }

    #[tokio::test]
    async fn test_empty_feed_from_server_renders_placeholder() {
        let url = serve_once("200 OK", "[]").await;
        let client = ApiClient::new(Environment::Custom { base_url: url }).unwrap();
        let activities = client.recent_activities().await.unwrap();

        let mut state = state(Language::En);
        state.add_message(UiMessage::Data(PollResult::Activities(activities)));
        state.update(state.now);

        let screen = render_to_string(&state);
        assert!(screen.contains("No recent activity"));
    }

    #[test]
    fn test_loading_placeholder_follows_language() {
        let screen = render_to_string(&state(Language::Ar));
        assert!(screen.contains("التحميل"));
        assert!(!screen.contains("Loading..."));
    }

    #[test]
    fn test_badge_rendered_in_header() {
        let mut state = state(Language::En);
        state.apply_notification_check(NotificationCheck {
            has_new: true,
            count: 150,
        });

        let screen = render_to_string(&state);
        assert!(screen.contains("99+"));
        assert!(screen.contains("You have 150 new notifications"));
    }
}
