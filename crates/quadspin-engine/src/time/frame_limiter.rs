use std::time::{Duration, Instant};

/// Caps the redraw rate by scheduling the next frame deadline.
///
/// Each frame start pushes the deadline to `start + 1 / fps`. A frame that
/// overruns its slot simply starts the next one immediately; missed slots are
/// not made up with a burst of frames.
///
/// `FrameLimiter::new(0)` disables limiting.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Option<Duration>,
    next: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        let interval = (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / target_fps as f64));
        Self { interval, next: None }
    }

    pub fn unlimited() -> Self {
        Self::new(0)
    }

    /// Frame slot length, `None` when unlimited.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Earliest instant at which the next frame may start.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns true when a frame may start at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|deadline| now >= deadline)
    }

    /// Records that a frame started at `now`.
    pub fn frame_started(&mut self, now: Instant) {
        self.next = self.interval.map(|i| now + i);
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::unlimited()
    }
}
