//! Testimonial carousel
//!
//! A cyclic slide index guarded by a busy flag: while a slide transition is
//! animating, further navigation is rejected so the active dot and the active
//! slide are always the same index.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    slides: Vec<T>,
    index: usize,
    transition: Duration,
    /// Start of the transition currently animating, if any.
    in_flight: Option<Instant>,
    /// Index the in-flight transition is leaving.
    previous: Option<usize>,
}

impl<T> Carousel<T> {
    pub fn new(slides: Vec<T>, transition: Duration) -> Self {
        Self {
            slides,
            index: 0,
            transition,
            in_flight: None,
            previous: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.slides.get(self.index)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Slide being animated out, while a transition is in flight.
    pub fn leaving(&self) -> Option<usize> {
        self.previous
    }

    /// Fraction of the in-flight transition that has elapsed.
    pub fn transition_progress(&self, now: Instant) -> Option<f64> {
        let started = self.in_flight?;
        if self.transition.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        Some((elapsed / self.transition.as_secs_f64()).min(1.0))
    }

    pub fn next(&mut self, now: Instant) -> bool {
        if self.slides.is_empty() {
            return false;
        }
        let target = (self.index + 1) % self.slides.len();
        self.begin(target, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        if self.slides.is_empty() {
            return false;
        }
        let n = self.slides.len();
        let target = (self.index + n - 1) % n;
        self.begin(target, now)
    }

    /// Jumps to slide `k`. Out-of-range or current index is a no-op.
    pub fn go_to(&mut self, k: usize, now: Instant) -> bool {
        if k >= self.slides.len() || k == self.index {
            return false;
        }
        self.begin(k, now)
    }

    /// Completes the in-flight transition once its animation has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(started) = self.in_flight {
            if now.saturating_duration_since(started) >= self.transition {
                self.in_flight = None;
                self.previous = None;
            }
        }
    }

    fn begin(&mut self, target: usize, now: Instant) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.previous = Some(self.index);
        self.index = target;
        self.in_flight = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSITION: Duration = Duration::from_millis(600);

    fn carousel(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect(), TRANSITION)
    }

    #[test]
    fn test_next_n_times_returns_to_start() {
        let mut c = carousel(4);
        let mut now = Instant::now();
        for _ in 0..4 {
            assert!(c.next(now));
            now += TRANSITION;
            c.tick(now);
        }
        assert_eq!(c.index(), 0);
        assert!(!c.is_busy());
    }

    #[test]
    fn test_next_while_busy_is_rejected() {
        let mut c = carousel(3);
        let now = Instant::now();
        assert!(c.next(now));
        assert_eq!(c.index(), 1);

        // Rapid input during the animation changes nothing
        assert!(!c.next(now + Duration::from_millis(100)));
        assert!(!c.prev(now + Duration::from_millis(200)));
        assert!(!c.go_to(0, now + Duration::from_millis(300)));
        c.tick(now + Duration::from_millis(599));
        assert!(c.is_busy());
        assert_eq!(c.index(), 1);

        c.tick(now + TRANSITION);
        assert!(c.next(now + TRANSITION));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut c = carousel(3);
        assert!(c.prev(Instant::now()));
        assert_eq!(c.index(), 2);
        assert_eq!(c.leaving(), Some(0));
        assert_eq!(c.current(), Some(&2));
    }

    #[test]
    fn test_go_to_bounds() {
        let mut c = carousel(3);
        let now = Instant::now();
        assert!(!c.go_to(3, now));
        assert!(!c.go_to(0, now));
        assert!(c.go_to(2, now));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_empty_carousel_ignores_navigation() {
        let mut c = carousel(0);
        let now = Instant::now();
        assert!(!c.next(now));
        assert!(!c.prev(now));
        assert!(c.current().is_none());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_transition_progress() {
        let mut c = carousel(2);
        let now = Instant::now();
        assert_eq!(c.transition_progress(now), None);
        c.next(now);
        let half = c.transition_progress(now + TRANSITION / 2).unwrap();
        assert!((half - 0.5).abs() < 1e-9);
    }
}
