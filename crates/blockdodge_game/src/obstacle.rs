//! Falling obstacles
//!
//! Obstacles spawn above the top edge, fall straight down at the speed
//! they were spawned with, and are dropped once they pass the despawn
//! line below the bottom edge. They carry no identity beyond position
//! and speed.

use crate::geometry::{Aabb, Vec2};

/// A single falling obstacle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Horizontal position (fixed for the obstacle's lifetime)
    pub x: f32,
    /// Vertical position
    pub y: f32,
    /// Downward speed in units per second
    pub speed: f32,
}

impl Obstacle {
    /// Create a new obstacle
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self { x, y, speed }
    }

    /// Move the obstacle down by one frame
    pub fn advance(&mut self, dt: f32) {
        self.y -= self.speed * dt;
    }

    /// Get the obstacle's collision box
    ///
    /// The half-extents come from the tuning; obstacles do not store
    /// their own size.
    pub fn collider(&self, half_width: f32, half_height: f32) -> Aabb {
        Aabb::from_center_half_extents(
            Vec2::new(self.x, self.y),
            Vec2::new(half_width, half_height),
        )
    }

    /// Whether the obstacle has fallen past the despawn line
    pub fn is_below(&self, despawn_y: f32) -> bool {
        self.y < despawn_y
    }
}
