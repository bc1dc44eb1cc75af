//! Fixed-interval spawn timer
//!
//! Accumulates frame time and fires once the configured interval is
//! reached. The accumulator resets to zero on fire rather than carrying
//! the overshoot, so at most one spawn happens per frame.

/// Spawn timer driven by frame delta time
#[derive(Clone, Copy, Debug, Default)]
pub struct Spawner {
    accumulator: f32,
}

impl Spawner {
    /// Create a spawner with an empty accumulator
    pub fn new() -> Self {
        Self { accumulator: 0.0 }
    }

    /// Advance the timer by one frame
    ///
    /// Returns true when a spawn is due; the accumulator is cleared in
    /// that case.
    pub fn tick(&mut self, dt: f32, interval: f32) -> bool {
        self.accumulator += dt;
        if self.accumulator >= interval {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }

    /// Clear the accumulator (used on restart)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
