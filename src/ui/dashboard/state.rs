//! Dashboard state management
//!
//! Contains the main dashboard state struct. Everything the reconciler
//! touches lives here and is only mutated from the UI dispatcher loop.

use crate::animation::{AnimatedCounter, ease_out_quart};
use crate::carousel::Carousel;
use crate::config::Theme;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, STAT_COUNTERS, animation};
use crate::environment::Environment;
use crate::events::{Event, UiMessage};
use crate::i18n::Language;
use crate::models::{Activities, Testimonial};
use crate::toast::{ToastCenter, ToastSurface};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Built-in testimonials shown in the carousel.
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Sara A.",
            "Web Development",
            "The projects made everything click. I shipped my first site in a month.",
        ),
        Testimonial::new(
            "Omar K.",
            "Data Science",
            "Clear lessons and quick feedback. The weekly goals kept me going.",
        ),
        Testimonial::new(
            "Lina M.",
            "Mobile Apps",
            "I studied in Arabic and English side by side. Exactly what I needed.",
        ),
    ]
}

/// Dashboard state fed by the pollers and by key presses.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    pub theme: Theme,
    pub language: Language,
    /// Mirrors the poller's full-refresh toggle for the header.
    pub auto_refresh: bool,

    /// One counter per stat mount point, in display order.
    pub counters: Vec<(String, AnimatedCounter)>,
    /// `None` until the first activities payload arrives.
    pub activities: Option<Activities>,
    /// Unread notification count currently on the badge.
    badge: Option<u32>,
    /// Count the last notification toast announced.
    last_announced: Option<u32>,

    pub toasts: ToastCenter,
    pub testimonials: Carousel<Testimonial>,
    /// Last time the carousel moved, by the user or automatically.
    pub(super) last_advance: Instant,

    /// Queue of messages waiting to be processed
    pub pending_messages: VecDeque<UiMessage>,
    /// Event log for display
    pub activity_logs: VecDeque<Event>,
    /// Time of the current frame; animations are sampled here.
    pub now: Instant,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        let counters = STAT_COUNTERS
            .iter()
            .map(|key| {
                (
                    key.to_string(),
                    AnimatedCounter::new(0, animation::counter_duration())
                        .with_easing(ease_out_quart),
                )
            })
            .collect();

        Self {
            environment,
            start_time,
            with_background_color: ui_config.with_background_color,
            theme: ui_config.theme,
            language: ui_config.language,
            auto_refresh: ui_config.auto_refresh,
            counters,
            activities: None,
            badge: None,
            last_announced: None,
            toasts: ToastCenter::new(&[ToastSurface::Dashboard, ToastSurface::Page]),
            testimonials: Carousel::new(ui_config.testimonials, animation::carousel_transition()),
            last_advance: start_time,
            pending_messages: VecDeque::new(),
            activity_logs: VecDeque::new(),
            now: start_time,
            tick: 0,
        }
    }

    pub fn badge(&self) -> Option<u32> {
        self.badge
    }

    pub(super) fn set_badge(&mut self, badge: Option<u32>) {
        self.badge = badge;
    }

    pub(super) fn last_announced(&self) -> Option<u32> {
        self.last_announced
    }

    pub(super) fn set_last_announced(&mut self, count: Option<u32>) {
        self.last_announced = count;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add a message to the processing queue
    pub fn add_message(&mut self, message: UiMessage) {
        self.pending_messages.push_back(message);
    }
}
