use std::time::Duration;

use crate::FrameLimiter;

/// Default pause between frames.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// Sleeps a fixed duration after every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_FRAME_INTERVAL)
    }
}

impl FrameLimiter for FixedDelay {
    fn wait(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Never waits. For scripted runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl FrameLimiter for NoDelay {
    #[inline]
    fn wait(&mut self) {}
}
