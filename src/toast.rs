//! Transient notifications.
//!
//! Each surface holds at most one toast. Showing a new toast on a surface
//! replaces the previous one, and every toast expires after the surface's
//! auto-dismiss delay.

use crate::consts::cli_consts::toast;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Where a toast is mounted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ToastSurface {
    /// Results of dashboard refreshes.
    Dashboard,
    /// Page-level notifications.
    Page,
}

impl ToastSurface {
    pub fn ttl(&self) -> Duration {
        match self {
            ToastSurface::Dashboard => toast::dashboard_ttl(),
            ToastSurface::Page => toast::page_ttl(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

/// The mounted toast surfaces of a screen.
#[derive(Debug, Default)]
pub struct ToastCenter {
    slots: HashMap<ToastSurface, Option<Toast>>,
}

impl ToastCenter {
    pub fn new(mounted: &[ToastSurface]) -> Self {
        Self {
            slots: mounted.iter().map(|surface| (*surface, None)).collect(),
        }
    }

    /// Shows a toast, replacing the one currently on the same surface.
    /// Unmounted surfaces silently ignore the call.
    pub fn show(&mut self, surface: ToastSurface, message: impl Into<String>, kind: ToastKind, now: Instant) {
        if let Some(slot) = self.slots.get_mut(&surface) {
            *slot = Some(Toast {
                message: message.into(),
                kind,
                shown_at: now,
                ttl: surface.ttl(),
            });
        }
    }

    /// Manual close.
    pub fn dismiss(&mut self, surface: ToastSurface) {
        if let Some(slot) = self.slots.get_mut(&surface) {
            *slot = None;
        }
    }

    pub fn dismiss_all(&mut self) {
        self.slots.values_mut().for_each(|slot| *slot = None);
    }

    /// Drops toasts whose auto-dismiss delay has passed.
    pub fn expire(&mut self, now: Instant) {
        for slot in self.slots.values_mut() {
            if slot.as_ref().is_some_and(|t| t.is_expired(now)) {
                *slot = None;
            }
        }
    }

    pub fn current(&self, surface: ToastSurface) -> Option<&Toast> {
        self.slots.get(&surface).and_then(|slot| slot.as_ref())
    }

    /// Visible toasts, page notifications first.
    pub fn visible(&self) -> Vec<(ToastSurface, &Toast)> {
        [ToastSurface::Page, ToastSurface::Dashboard]
            .into_iter()
            .filter_map(|surface| self.current(surface).map(|t| (surface, t)))
            .collect()
    }
}
