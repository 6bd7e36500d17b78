use std::time::Duration;

/// Scroll offset past which the button shows
pub const VISIBILITY_THRESHOLD: f64 = 300.0;

/// Length of the animated scroll back to the top
pub const SCROLL_DURATION: Duration = Duration::from_millis(800);

pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Default)]
pub struct BackToTop {
    visible: bool,
}

impl BackToTop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the new visibility when it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        let visible = offset > VISIBILITY_THRESHOLD;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}

/// Quadratic ease-in-out: `start` plus the share of `change` covered after
/// `elapsed` out of `duration`.
pub fn ease_in_out_quad(elapsed: f64, start: f64, change: f64, duration: f64) -> f64 {
    let t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + start;
    }
    let t = t - 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + start
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub position: f64,
    pub finished: bool,
}

/// One run of the eased scroll from `start_position` to 0, sampled per frame.
#[derive(Debug)]
pub struct ScrollToTop {
    start_position: f64,
    started_at: Option<Duration>,
    duration: Duration,
}

impl ScrollToTop {
    pub fn new(start_position: f64) -> Self {
        Self {
            start_position,
            started_at: None,
            duration: SCROLL_DURATION,
        }
    }

    /// The first frame fixes the start time.
    pub fn frame(&mut self, now: Duration) -> ScrollFrame {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at).min(self.duration);
        let position = ease_in_out_quad(
            elapsed.as_secs_f64(),
            self.start_position,
            -self.start_position,
            self.duration.as_secs_f64(),
        );
        ScrollFrame {
            position,
            finished: elapsed >= self.duration,
        }
    }
}
