//! GPU-facing vertex and instance layouts

use bytemuck::{Pod, Zeroable};

/// A single 2D vertex in normalized device coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    pub position: [f32; 2],
}

impl Vertex2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

/// Per-instance data: world offset plus flat color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance2D {
    pub offset: [f32; 2],
    pub color: [f32; 4],
}

impl Instance2D {
    #[inline]
    pub const fn new(offset: [f32; 2], color: [f32; 4]) -> Self {
        Self { offset, color }
    }
}
