//! Flat-color instanced pipeline for 2D sprites
//!
//! All game sprites share one shader: each vertex is offset by a
//! per-instance translation and shaded with a per-instance color.
//! The player and the obstacles draw from the same instance buffer
//! with disjoint instance ranges.

use std::ops::Range;

use crate::mesh::Mesh2D;
use crate::types::{Instance2D, Vertex2D};

/// One draw call: a mesh plus the instance range to draw it with
pub struct DrawBatch<'a> {
    pub mesh: &'a Mesh2D,
    pub instances: Range<u32>,
}

/// Render pipeline for flat-colored 2D instances
pub struct FlatPipeline {
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
    /// Shared instance buffer, grown on demand
    instance_buffer: wgpu::Buffer,
    /// Capacity of the instance buffer, in instances
    instance_capacity: usize,
}

/// Initial instance buffer capacity; enough for the player plus a
/// typical obstacle load without reallocation
const INITIAL_INSTANCE_CAPACITY: usize = 64;

impl FlatPipeline {
    /// Create a new flat-color pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        // Create pipeline layout (no bind groups; everything rides in
        // the vertex streams)
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        // Load shader
        let shader_source = include_str!("shaders/flat.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Flat Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        // Create render pipeline
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Flat Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout(), Self::instance_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        // Create instance buffer
        let instance_buffer = Self::create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY);

        Self {
            pipeline,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
        }
    }

    /// Get the vertex buffer layout for Vertex2D
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
            ],
        }
    }

    /// Get the instance buffer layout for Instance2D
    fn instance_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // offset: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 1,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 2,
                },
            ],
        }
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (capacity * std::mem::size_of::<Instance2D>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Upload per-frame instance data
    ///
    /// The buffer is recreated at double the needed size when the
    /// instance count outgrows it; otherwise the existing buffer is
    /// overwritten in place.
    pub fn upload_instances(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[Instance2D],
    ) {
        if instances.is_empty() {
            return;
        }

        if instances.len() > self.instance_capacity {
            let new_capacity = (instances.len() * 2).max(INITIAL_INSTANCE_CAPACITY);
            log::debug!(
                "Growing instance buffer: {} -> {} instances",
                self.instance_capacity,
                new_capacity
            );
            self.instance_buffer = Self::create_instance_buffer(device, new_capacity);
            self.instance_capacity = new_capacity;
        }
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
    }

    /// Record one render pass drawing every batch
    ///
    /// The first batch clears the surface; instance ranges index into
    /// the buffer filled by [`FlatPipeline::upload_instances`].
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
        batches: &[DrawBatch<'_>],
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Flat Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

        for batch in batches {
            if batch.instances.is_empty() {
                continue;
            }
            render_pass.set_vertex_buffer(0, batch.mesh.vertex_buffer.slice(..));
            render_pass.draw(0..batch.mesh.vertex_count, batch.instances.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = FlatPipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<Vertex2D>() as u64);
        assert_eq!(layout.attributes.len(), 1);
    }

    #[test]
    fn test_instance_buffer_layout_stride() {
        let layout = FlatPipeline::instance_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<Instance2D>() as u64);
        assert_eq!(layout.attributes.len(), 2);
    }

    #[test]
    fn test_instance_attributes_cover_struct() {
        let layout = FlatPipeline::instance_buffer_layout();
        // offset at byte 0, color right after the vec2
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 8);
    }
}
