//! 2D Rendering Library
//!
//! This crate provides the wgpu-based rendering path for Block Dodger:
//! flat-colored sprites drawn as instanced meshes over a cleared
//! background.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::FlatPipeline`] - Instanced flat-color render pipeline
//! - [`mesh::Mesh2D`] - Static vertex buffers for the two sprite shapes
//! - [`scene::SceneInstances`] - Converts a game session to GPU instances

pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod scene;
pub mod types;

// Re-export the frame-loop types for convenience
pub use context::{ContextError, RenderContext};
pub use mesh::Mesh2D;
pub use pipeline::{DrawBatch, FlatPipeline};
pub use scene::{Palette, SceneInstances};
pub use types::{Instance2D, Vertex2D};
