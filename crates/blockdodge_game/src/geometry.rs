//! 2D geometry primitives
//!
//! The playfield lives in normalized device coordinates: x and y both
//! run from -1.0 to +1.0, with +y pointing up.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// 2D vector with x and y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// Operator overloads

impl std::ops::Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// A 2D axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner (left/bottom)
    pub min: Vec2,
    /// Maximum corner (right/top)
    pub max: Vec2,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents (half the size on each axis)
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Translate the AABB by a delta
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Check whether two boxes overlap
    ///
    /// Strict inequality: boxes that merely share an edge do not count
    /// as overlapping, so a pixel-perfect graze is survivable.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
    }

    #[test]
    fn test_vec2_add_sub() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_vec2_add_assign() {
        let mut v = Vec2::new(1.0, 1.0);
        v += Vec2::new(0.5, -0.5);
        assert_eq!(v, Vec2::new(1.5, 0.5));
    }

    #[test]
    fn test_vec2_mul_scalar() {
        let v = Vec2::new(1.0, -2.0);
        assert_eq!(v * 2.0, Vec2::new(2.0, -4.0));
    }

    #[test]
    fn test_aabb_from_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec2::new(1.0, 2.0), Vec2::new(0.5, 0.25));
        assert_eq!(aabb.min, Vec2::new(0.5, 1.75));
        assert_eq!(aabb.max, Vec2::new(1.5, 2.25));
        assert_eq!(aabb.center(), Vec2::new(1.0, 2.0));
        assert_eq!(aabb.half_extents(), Vec2::new(0.5, 0.25));
    }

    #[test]
    fn test_aabb_translated() {
        let aabb = Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let moved = aabb.translated(Vec2::new(0.5, -0.5));
        assert_eq!(moved.min, Vec2::new(0.5, -0.5));
        assert_eq!(moved.max, Vec2::new(1.5, 0.5));
    }

    #[test]
    fn test_overlap() {
        let a = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(0.5, 0.5));
        let b = Aabb::from_center_half_extents(Vec2::new(0.4, 0.4), Vec2::new(0.5, 0.5));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_separated_x() {
        let a = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(0.5, 0.5));
        let b = Aabb::from_center_half_extents(Vec2::new(2.0, 0.0), Vec2::new(0.5, 0.5));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_no_overlap_separated_y() {
        let a = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(0.5, 0.5));
        let b = Aabb::from_center_half_extents(Vec2::new(0.0, 2.0), Vec2::new(0.5, 0.5));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Exactly adjacent boxes: |dx| == sum of half-widths
        let a = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(0.5, 0.5));
        let b = Aabb::from_center_half_extents(Vec2::new(1.0, 0.0), Vec2::new(0.5, 0.5));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let inner = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(0.1, 0.1));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
