use std::thread;
use std::time::Duration;

// Use web-time for cross-platform time support (native + WASM)
use web_time::Instant;

/// Pads frames to a fixed rate.
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleeps until one period has passed since the previous tick and
    /// returns how long the frame's work took.
    pub fn tick(&mut self) -> Duration {
        let busy = self.frame_start.elapsed();
        if let Some(remaining) = self.period.checked_sub(busy) {
            thread::sleep(remaining);
        }
        log::trace!("frame work {busy:?} of {:?}", self.period);
        self.frame_start = Instant::now();
        busy
    }
}
