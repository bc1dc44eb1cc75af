//! Static 2D meshes for the game's two sprite shapes

use wgpu::util::DeviceExt;

use crate::types::Vertex2D;

/// Vertices for an axis-aligned quad centered on the origin
///
/// Two counter-clockwise triangles, no index buffer.
pub fn quad_vertices(half_width: f32, half_height: f32) -> [Vertex2D; 6] {
    [
        Vertex2D::new(-half_width, -half_height),
        Vertex2D::new(half_width, -half_height),
        Vertex2D::new(half_width, half_height),
        Vertex2D::new(-half_width, -half_height),
        Vertex2D::new(half_width, half_height),
        Vertex2D::new(-half_width, half_height),
    ]
}

/// Vertices for a tip-down triangle centered on the origin
///
/// The tip sits at the bottom so falling obstacles read as spikes.
pub fn drop_triangle_vertices(half_width: f32, half_height: f32) -> [Vertex2D; 3] {
    [
        Vertex2D::new(0.0, -half_height),
        Vertex2D::new(half_width, half_height),
        Vertex2D::new(-half_width, half_height),
    ]
}

/// A vertex buffer plus its draw count
pub struct Mesh2D {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl Mesh2D {
    /// Upload a vertex list into a GPU buffer
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex2D]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    /// Quad mesh used for the player block
    pub fn quad(device: &wgpu::Device, half_width: f32, half_height: f32) -> Self {
        Self::new(device, "Quad Mesh", &quad_vertices(half_width, half_height))
    }

    /// Tip-down triangle mesh used for obstacles
    pub fn drop_triangle(device: &wgpu::Device, half_width: f32, half_height: f32) -> Self {
        Self::new(
            device,
            "Drop Triangle Mesh",
            &drop_triangle_vertices(half_width, half_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_has_six_vertices() {
        let verts = quad_vertices(0.5, 0.5);
        assert_eq!(verts.len(), 6);
    }

    #[test]
    fn test_quad_spans_extents() {
        let verts = quad_vertices(0.08, 0.08);
        for v in &verts {
            assert!(v.position[0].abs() <= 0.08 + 1e-6);
            assert!(v.position[1].abs() <= 0.08 + 1e-6);
        }
        // All four corners appear somewhere in the list
        assert!(verts.contains(&Vertex2D::new(-0.08, -0.08)));
        assert!(verts.contains(&Vertex2D::new(0.08, 0.08)));
    }

    #[test]
    fn test_quad_winding_is_ccw() {
        let verts = quad_vertices(1.0, 1.0);
        for tri in verts.chunks(3) {
            let [ax, ay] = tri[0].position;
            let [bx, by] = tri[1].position;
            let [cx, cy] = tri[2].position;
            let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
            assert!(cross > 0.0, "triangle winding should be counter-clockwise");
        }
    }

    #[test]
    fn test_triangle_tip_points_down() {
        let verts = drop_triangle_vertices(0.07, 0.08);
        assert_eq!(verts[0], Vertex2D::new(0.0, -0.08));
        assert_eq!(verts[1], Vertex2D::new(0.07, 0.08));
        assert_eq!(verts[2], Vertex2D::new(-0.07, 0.08));
    }

    #[test]
    fn test_triangle_winding_is_ccw() {
        let verts = drop_triangle_vertices(0.07, 0.08);
        let [ax, ay] = verts[0].position;
        let [bx, by] = verts[1].position;
        let [cx, cy] = verts[2].position;
        let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
        assert!(cross > 0.0);
    }
}
