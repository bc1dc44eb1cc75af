//! Difficulty ramp
//!
//! Survival gets harder over time: every `ramp_interval` seconds of live
//! play the spawn interval shrinks by `ramp_factor` (down to a floor)
//! and new obstacles fall a little faster. Only the interval is clamped;
//! obstacle speed keeps growing for as long as the run lasts.

use crate::tuning::Tuning;

/// Current difficulty state
#[derive(Clone, Copy, Debug)]
pub struct Difficulty {
    /// Seconds between spawns at the current difficulty
    pub spawn_interval: f32,
    /// Fall speed given to newly spawned obstacles
    pub obstacle_speed: f32,
    timer: f32,
}

impl Difficulty {
    /// Start at the base difficulty from the tuning
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_interval: tuning.spawn_interval,
            obstacle_speed: tuning.obstacle_speed,
            timer: 0.0,
        }
    }

    /// Advance the ramp timer by one frame of live play
    ///
    /// Returns true when a ramp step was applied this frame.
    pub fn advance(&mut self, dt: f32, tuning: &Tuning) -> bool {
        self.timer += dt;
        if self.timer >= tuning.ramp_interval {
            self.timer -= tuning.ramp_interval;
            self.spawn_interval =
                (self.spawn_interval * tuning.ramp_factor).max(tuning.min_spawn_interval);
            self.obstacle_speed += tuning.speed_step;
            true
        } else {
            false
        }
    }

    /// Back to base difficulty (used on restart)
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }
}
