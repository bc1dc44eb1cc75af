//! Player state and steering
//!
//! The player is a square that slides along a fixed horizontal line near
//! the bottom of the screen. Only its x coordinate ever changes.

use crate::geometry::{Aabb, Vec2};
use crate::tuning::Tuning;

/// The player square
///
/// `y` and `x_limit` are derived from the tuning at construction and
/// stay fixed for the lifetime of the player.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    /// Horizontal position (center of the square)
    pub x: f32,
    /// Vertical position, fixed just above the bottom edge
    pub y: f32,
    /// Half the side length of the square
    pub half: f32,
    /// Steering speed in units per second
    pub speed: f32,
    /// |x| is clamped to this so the square never leaves the screen
    pub x_limit: f32,
}

impl Player {
    /// Create a player centered at the bottom of the screen
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: 0.0,
            y: -1.0 + tuning.player_half + tuning.player_bottom_margin,
            half: tuning.player_half,
            speed: tuning.player_speed,
            x_limit: 1.0 - tuning.player_half,
        }
    }

    /// Apply one frame of steering
    ///
    /// `axis` is the input direction in -1.0..=1.0 (negative = left).
    /// The position is clamped so the square stays fully on screen.
    pub fn steer(&mut self, axis: f32, dt: f32) {
        self.x += axis * self.speed * dt;
        self.x = self.x.clamp(-self.x_limit, self.x_limit);
    }

    /// Get the player's collision box at the current position
    pub fn collider(&self) -> Aabb {
        Aabb::from_center_half_extents(Vec2::new(self.x, self.y), Vec2::new(self.half, self.half))
    }

    /// Move the player back to the center
    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_new_player() {
        let player = Player::new(&Tuning::default());
        assert_eq!(player.x, 0.0);
        // -1.0 + 0.08 + 0.02 = -0.90
        assert!((player.y - (-0.90)).abs() < EPSILON);
        // 1.0 - 0.08 = 0.92
        assert!((player.x_limit - 0.92).abs() < EPSILON);
    }

    #[test]
    fn test_steer_right() {
        let mut player = Player::new(&Tuning::default());
        player.steer(1.0, 0.5);
        // 0.8 units/s for half a second
        assert!((player.x - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_steer_left() {
        let mut player = Player::new(&Tuning::default());
        player.steer(-1.0, 0.25);
        assert!((player.x - (-0.2)).abs() < EPSILON);
    }

    #[test]
    fn test_steer_zero_axis_stays_put() {
        let mut player = Player::new(&Tuning::default());
        player.steer(0.0, 1.0);
        assert_eq!(player.x, 0.0);
    }

    #[test]
    fn test_clamped_at_right_edge() {
        let mut player = Player::new(&Tuning::default());
        for _ in 0..100 {
            player.steer(1.0, 0.1);
        }
        assert!((player.x - player.x_limit).abs() < EPSILON);
    }

    #[test]
    fn test_clamped_at_left_edge() {
        let mut player = Player::new(&Tuning::default());
        for _ in 0..100 {
            player.steer(-1.0, 0.1);
        }
        assert!((player.x - (-player.x_limit)).abs() < EPSILON);
    }

    #[test]
    fn test_collider_centered_on_player() {
        let mut player = Player::new(&Tuning::default());
        player.steer(1.0, 0.5);
        let collider = player.collider();
        assert!((collider.center().x - player.x).abs() < EPSILON);
        assert!((collider.center().y - player.y).abs() < EPSILON);
        assert!((collider.half_extents().x - player.half).abs() < EPSILON);
        assert!((collider.half_extents().y - player.half).abs() < EPSILON);
    }

    #[test]
    fn test_reset_recenters() {
        let mut player = Player::new(&Tuning::default());
        player.steer(1.0, 1.0);
        player.reset();
        assert_eq!(player.x, 0.0);
    }
}
