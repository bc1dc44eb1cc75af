//! 03 - Obstacles
//!
//! The whole game without the HUD: dodge the falling spikes for as
//! long as you can. A/D or arrows steer, R restarts after a hit.
//!
//! This example demonstrates:
//! - Running a full GameSession per frame
//! - Building instance data with SceneInstances
//! - Drawing the player and obstacle batches from one instance buffer
//!
//! Run with: `cargo run --example 03_obstacles`

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use blockdodge_game::{GameSession, Tuning};
use blockdodge_input::PlayerController;
use blockdodge_render::{
    context::RenderContext,
    mesh::Mesh2D,
    pipeline::{DrawBatch, FlatPipeline},
    scene::{Palette, SceneInstances},
};

/// Application state
struct App {
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<FlatPipeline>,
    player_mesh: Option<Mesh2D>,
    obstacle_mesh: Option<Mesh2D>,
    session: GameSession,
    controller: PlayerController,
    palette: Palette,
    last_frame: std::time::Instant,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            render_context: None,
            pipeline: None,
            player_mesh: None,
            obstacle_mesh: None,
            session: GameSession::new(Tuning::default()),
            controller: PlayerController::new(),
            palette: Palette::default(),
            last_frame: std::time::Instant::now(),
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
                            .with_title("Block Dodger - Obstacles")
                            .with_inner_size(winit::dpi::LogicalSize::new(640, 480)),
                    )
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::new(window.clone(), true))
                .expect("Failed to create render context");
            let pipeline = FlatPipeline::new(&render_context.device, render_context.config.format);

            let tuning = Tuning::default();
            let player_mesh = Mesh2D::quad(
                &render_context.device,
                tuning.player_half,
                tuning.player_half,
            );
            let obstacle_mesh = Mesh2D::drop_triangle(
                &render_context.device,
                tuning.obstacle_half_width,
                tuning.obstacle_half_height,
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
            self.player_mesh = Some(player_mesh);
            self.obstacle_mesh = Some(obstacle_mesh);
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
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.controller.process_keyboard(key, event.state);
                }
            }
            WindowEvent::RedrawRequested => {
                let now = std::time::Instant::now();
                let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
                self.last_frame = now;

                if self.controller.consume_restart() {
                    self.session.restart();
                }
                self.session.update(dt, self.controller.axis());

                let scene = SceneInstances::from_session(&self.session, &self.palette);
                if let (Some(pipeline), Some(ctx)) = (&mut self.pipeline, &self.render_context) {
                    pipeline.upload_instances(&ctx.device, &ctx.queue, &scene.instances);
                }

                if let (Some(ctx), Some(pipeline), Some(player_mesh), Some(obstacle_mesh)) = (
                    &self.render_context,
                    &self.pipeline,
                    &self.player_mesh,
                    &self.obstacle_mesh,
                ) {
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
                        &[
                            DrawBatch {
                                mesh: player_mesh,
                                instances: scene.player_range.clone(),
                            },
                            DrawBatch {
                                mesh: obstacle_mesh,
                                instances: scene.obstacle_range.clone(),
                            },
                        ],
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
