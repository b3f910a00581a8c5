use std::time::{Duration, Instant};

/// Trailing-edge rate limiter for input samples. Submitting opens a window;
/// further submissions within the window replace the pending value, and the
/// latest value is released once per window when polled after the interval
/// elapses. Intermediate samples are dropped.
pub struct Throttle<T> {
    interval: Duration,
    pending: Option<T>,
    window_start: Option<Instant>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            window_start: None,
        }
    }

    pub fn submit(&mut self, value: T, now: Instant) {
        if self.window_start.is_none() {
            self.window_start = Some(now);
        }
        self.pending = Some(value);
    }

    /// Releases the pending value when the current window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let start = self.window_start?;
        if now.duration_since(start) >= self.interval {
            self.window_start = None;
            self.pending.take()
        } else {
            None
        }
    }
}
