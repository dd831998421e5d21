use instant::Instant;
use std::time::Duration;

/// Measures the time elapsed between consecutive frames.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_instant: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
        }
    }

    /// Elapsed time since the previous call (or since construction).
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
