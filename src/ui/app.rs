//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::{Preferences, Theme};
use crate::environment::Environment;
use crate::events::{Event as UiEvent, EventType, Source, UiMessage};
use crate::i18n::{Language, Text, tr};
use crate::logging::LogLevel;
use crate::models::Testimonial;
use crate::polling::{PollName, Poller};
use crate::toast::ToastKind;
use crate::ui::dashboard::state::default_testimonials;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub theme: Theme,
    pub language: Language,
    pub auto_refresh: bool,
    pub testimonials: Vec<Testimonial>,
}

impl UIConfig {
    pub fn new(with_background_color: bool, preferences: &Preferences) -> Self {
        Self {
            with_background_color,
            theme: preferences.theme,
            language: preferences.language,
            auto_refresh: preferences.auto_refresh,
            testimonials: default_testimonials(),
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with stats, activity and testimonials.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives messages from the poll tasks.
    message_receiver: mpsc::Receiver<UiMessage>,

    /// Messages received before the dashboard was shown.
    early_messages: Vec<UiMessage>,

    /// Broadcasts shutdown signal to background tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Owns the poll timers for the lifetime of the UI.
    poller: Poller,

    preferences: Preferences,

    /// Where toggled preferences are persisted, if a home directory exists.
    preferences_path: Option<PathBuf>,

    /// Whether to enable background colors
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        message_receiver: mpsc::Receiver<UiMessage>,
        shutdown_sender: broadcast::Sender<()>,
        poller: Poller,
        preferences: Preferences,
        preferences_path: Option<PathBuf>,
        with_background_color: bool,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            message_receiver,
            early_messages: Vec::new(),
            shutdown_sender,
            poller,
            preferences,
            preferences_path,
            with_background_color,
        }
    }

    fn show_dashboard(&mut self) {
        let ui_config = UIConfig::new(self.with_background_color, &self.preferences);
        let mut state = DashboardState::new(self.environment.clone(), self.start_time, ui_config);
        for message in self.early_messages.drain(..) {
            state.add_message(message);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Writes preferences to disk. A failure is logged, not fatal.
    fn persist_preferences(&self, state: &mut DashboardState) {
        let Some(path) = &self.preferences_path else {
            return;
        };
        if let Err(e) = self.preferences.save(path) {
            let message = format!("Failed to save preferences: {}", e);
            state.notify(&message, ToastKind::Warning);
            state.add_to_activity_log(UiEvent::new(
                Source::User,
                message,
                EventType::Error,
                LogLevel::Warn,
            ));
        }
    }

    /// Applies a dashboard key press. Unbound keys are ignored.
    fn handle_dashboard_key(&mut self, code: KeyCode) {
        // Temporarily take the state out so preferences can be persisted alongside it
        let Screen::Dashboard(mut state) = std::mem::replace(&mut self.current_screen, Screen::Splash)
        else {
            return;
        };

        match code {
            KeyCode::Char('r') => {
                if self.poller.is_refreshing() {
                    state.add_to_activity_log(UiEvent::user(
                        "Refresh already in progress".to_string(),
                        EventType::Skipped,
                    ));
                } else {
                    state.add_to_activity_log(UiEvent::user(
                        "Manual refresh requested".to_string(),
                        EventType::Refresh,
                    ));
                    self.poller.refresh_all();
                }
            }
            KeyCode::Char('a') => {
                let enabled = !self.poller.auto_refresh_enabled();
                self.poller.set_auto_refresh_enabled(enabled);
                self.preferences.auto_refresh = enabled;
                state.auto_refresh = self.poller.is_armed(PollName::FullRefresh);
                let text = if enabled {
                    Text::AutoRefreshOn
                } else {
                    Text::AutoRefreshOff
                };
                let message = tr(state.language, text);
                state.notify(message, ToastKind::Info);
                self.persist_preferences(&mut state);
            }
            KeyCode::Char('t') => {
                state.theme = state.theme.toggled();
                self.preferences.theme = state.theme;
                self.persist_preferences(&mut state);
            }
            KeyCode::Char('l') => {
                state.language = state.language.toggled();
                self.preferences.language = state.language;
                self.persist_preferences(&mut state);
            }
            KeyCode::Right => {
                state.next_testimonial();
            }
            KeyCode::Left => {
                state.prev_testimonial();
            }
            KeyCode::Char(c @ '1'..='9') => {
                state.show_testimonial(c as usize - '1' as usize);
            }
            KeyCode::Char('x') => {
                state.toasts.dismiss_all();
            }
            _ => {}
        }

        self.current_screen = Screen::Dashboard(state);
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);
    let mut shutdown_receiver = app.shutdown_sender.subscribe();

    // UI event loop
    loop {
        // Ctrl+C in the session task
        if shutdown_receiver.try_recv().is_ok() {
            app.poller.stop();
            return Ok(());
        }

        // Queue all incoming messages for processing
        while let Ok(message) = app.message_receiver.try_recv() {
            match &mut app.current_screen {
                Screen::Dashboard(state) => state.add_message(message),
                Screen::Splash => app.early_messages.push(message),
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update(Instant::now());
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    app.poller.stop();
                    return Ok(());
                }

                match &app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => app.show_dashboard(),
                    Screen::Dashboard(_) => app.handle_dashboard_key(key.code),
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
