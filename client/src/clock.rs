//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Blocks until the next frame boundary
pub struct FrameClock {
    frame: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    /// Sleep until the next boundary. A frame that overran drops the
    /// backlog instead of running catch-up frames.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            self.next = now + self.frame;
        }
    }
}
