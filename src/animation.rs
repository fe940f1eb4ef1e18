//! Number tweening for the dashboard counters.
//!
//! The displayed value is a pure function of elapsed time, so the UI loop just
//! samples it once per frame.

use std::time::{Duration, Instant};

/// Maps linear progress `p` in `[0, 1]` to eased progress in `[0, 1]`.
pub type Easing = fn(f64) -> f64;

pub fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(4)
}

/// Value shown `elapsed` into a tween from `start` to `end`.
///
/// Always within `[min(start, end), max(start, end)]` and exactly `end` once
/// `elapsed >= duration`.
pub fn tween_value(start: i64, end: i64, elapsed: Duration, duration: Duration, easing: Easing) -> i64 {
    if duration.is_zero() || elapsed >= duration {
        return end;
    }
    let p = (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0);
    let eased = easing(p).clamp(0.0, 1.0);
    // Span in f64: `end - start` can overflow i64 for server-supplied values
    let value = start as f64 + (end as f64 - start as f64) * eased;
    (value.round() as i64).clamp(start.min(end), start.max(end))
}

/// A stat counter on the dashboard.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    from: i64,
    to: i64,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl AnimatedCounter {
    /// A counter at rest showing `value`.
    pub fn new(value: i64, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Instant::now(),
            duration,
            easing: ease_out_quart,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value rendered at `now`.
    pub fn displayed(&self, now: Instant) -> i64 {
        tween_value(
            self.from,
            self.to,
            now.saturating_duration_since(self.started_at),
            self.duration,
            self.easing,
        )
    }

    /// Starts a tween from whatever is displayed at `now` towards `target`.
    pub fn retarget(&mut self, target: i64, now: Instant) {
        self.from = self.displayed(now);
        self.to = target;
        self.started_at = now;
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.displayed(now) != self.to
    }
}
