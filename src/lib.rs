//! Block Dodger application library
//!
//! Exposes the app-level modules so integration tests can exercise
//! configuration loading and HUD state without running the binary.

pub mod config;
pub mod hud;
