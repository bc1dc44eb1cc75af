//! Gameplay tuning values
//!
//! All distances and speeds are in normalized device coordinates
//! (the playfield spans -1.0 to +1.0 on both axes).

/// Tunable gameplay constants
///
/// The defaults are the classic arcade values; the application layer
/// builds one of these from its config file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Half the side length of the player square
    pub player_half: f32,
    /// Horizontal player speed in units per second
    pub player_speed: f32,
    /// Gap between the bottom edge of the screen and the player square
    pub player_bottom_margin: f32,
    /// Seconds between obstacle spawns at the start of a run
    pub spawn_interval: f32,
    /// Y coordinate obstacles spawn at (just above the top edge)
    pub spawn_y: f32,
    /// Obstacles spawn with |x| up to this limit
    pub spawn_x_limit: f32,
    /// Downward obstacle speed in units per second at the start of a run
    pub obstacle_speed: f32,
    /// Half-width of an obstacle
    pub obstacle_half_width: f32,
    /// Half-height of an obstacle
    pub obstacle_half_height: f32,
    /// Obstacles below this y are dropped
    pub despawn_y: f32,
    /// Seconds of play between difficulty ramps
    pub ramp_interval: f32,
    /// Spawn interval is multiplied by this on each ramp
    pub ramp_factor: f32,
    /// The spawn interval never drops below this
    pub min_spawn_interval: f32,
    /// Obstacle speed gained on each ramp
    pub speed_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_half: 0.08,
            player_speed: 0.8,
            player_bottom_margin: 0.02,
            spawn_interval: 1.2,
            spawn_y: 1.2,
            spawn_x_limit: 0.9,
            obstacle_speed: 0.45,
            obstacle_half_width: 0.07,
            obstacle_half_height: 0.08,
            despawn_y: -1.2,
            ramp_interval: 5.0,
            ramp_factor: 0.9,
            min_spawn_interval: 0.4,
            speed_step: 0.05,
        }
    }
}
