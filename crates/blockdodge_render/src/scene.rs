//! Builds per-frame instance data from the game state

use std::ops::Range;

use blockdodge_game::GameSession;

use crate::types::Instance2D;

/// Sprite colors, RGBA in linear 0..1
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub player: [f32; 4],
    pub player_down: [f32; 4],
    pub obstacle: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: [0.0, 1.0, 0.0, 1.0],
            player_down: [1.0, 1.0, 0.0, 1.0],
            obstacle: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Flat instance list for one frame, split into draw ranges
///
/// The player instance always comes first, followed by every live
/// obstacle in spawn order.
pub struct SceneInstances {
    pub instances: Vec<Instance2D>,
    pub player_range: Range<u32>,
    pub obstacle_range: Range<u32>,
}

impl SceneInstances {
    /// Snapshot the session into GPU-ready instances
    pub fn from_session(session: &GameSession, palette: &Palette) -> Self {
        let mut instances = Vec::with_capacity(1 + session.obstacles.len());

        let player_color = if session.is_game_over() {
            palette.player_down
        } else {
            palette.player
        };
        instances.push(Instance2D::new(
            [session.player.x, session.player.y],
            player_color,
        ));

        for obstacle in &session.obstacles {
            instances.push(Instance2D::new([obstacle.x, obstacle.y], palette.obstacle));
        }

        let obstacle_end = instances.len() as u32;
        Self {
            instances,
            player_range: 0..1,
            obstacle_range: 1..obstacle_end,
        }
    }
}
