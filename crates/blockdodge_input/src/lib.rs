//! Block Dodger Input Handling
//!
//! This crate provides keyboard input handling for steering the
//! player and restarting a run.

mod player_controller;

pub use player_controller::PlayerController;
