//! Block Dodger gameplay logic
//!
//! This crate holds everything the game simulates, with no window or
//! GPU dependencies so the whole loop can run under `cargo test`.
//!
//! ## Core Types
//!
//! - [`GameSession`] - one frame-driven run: spawning, motion, collision, scoring
//! - [`Player`] - the steerable square at the bottom of the screen
//! - [`Obstacle`] - a falling obstacle
//! - [`Tuning`] - all gameplay constants with arcade defaults
//!
//! ## Support Types
//!
//! - [`Vec2`] / [`Aabb`] - minimal 2D geometry for the collision test
//! - [`Spawner`] - fixed-interval spawn timer
//! - [`Difficulty`] - the ramp that shrinks the spawn interval over time

mod geometry;
mod tuning;
mod player;
mod obstacle;
mod spawner;
mod difficulty;
mod session;

pub use geometry::{Aabb, Vec2};
pub use tuning::Tuning;
pub use player::Player;
pub use obstacle::Obstacle;
pub use spawner::Spawner;
pub use difficulty::Difficulty;
pub use session::{GameSession, Phase};
