//! 01 - Triangle
//!
//! The simplest Block Dodger example: clear the screen and draw one
//! falling-spike triangle with the flat-color pipeline.
//!
//! This example demonstrates:
//! - Creating a window with winit
//! - Setting up the render context and flat pipeline
//! - Uploading a mesh and a single instance
//! - Running a basic render loop
//!
//! Run with: `cargo run --example 01_triangle`

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use blockdodge_render::{
    context::RenderContext,
    mesh::Mesh2D,
    pipeline::{DrawBatch, FlatPipeline},
    types::Instance2D,
};

/// Application state
struct App {
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<FlatPipeline>,
    mesh: Option<Mesh2D>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            render_context: None,
            pipeline: None,
            mesh: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = Arc::new(
                event_loop
                    .create_window(
                        Window::default_attributes()
                            .with_title("Block Dodger - Triangle")
                            .with_inner_size(winit::dpi::LogicalSize::new(640, 480)),
                    )
                    .expect("Failed to create window"),
            );

            // Initialize rendering
            let render_context = pollster::block_on(RenderContext::new(window.clone(), true))
                .expect("Failed to create render context");
            let mut pipeline =
                FlatPipeline::new(&render_context.device, render_context.config.format);

            // One oversized spike in the middle of the screen
            let mesh = Mesh2D::drop_triangle(&render_context.device, 0.3, 0.35);
            pipeline.upload_instances(
                &render_context.device,
                &render_context.queue,
                &[Instance2D::new([0.0, 0.0], [1.0, 0.0, 0.0, 1.0])],
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
            self.mesh = Some(mesh);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(ctx), Some(pipeline), Some(mesh)) =
                    (&self.render_context, &self.pipeline, &self.mesh)
                {
                    let output = match ctx.surface.get_current_texture() {
                        Ok(o) => o,
                        Err(_) => return,
                    };
                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    let mut encoder = ctx
                        .device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

                    pipeline.render(
                        &mut encoder,
                        &view,
                        wgpu::Color {
                            r: 0.05,
                            g: 0.05,
                            b: 0.05,
                            a: 1.0,
                        },
                        &[DrawBatch {
                            mesh,
                            instances: 0..1,
                        }],
                    );

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
