//! Block Dodger
//!
//! A small arcade game: steer the block, dodge the falling spikes,
//! survive as long as you can.

mod config;
mod hud;

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use blockdodge_game::{GameSession, Tuning};
use blockdodge_input::PlayerController;
use blockdodge_render::{
    context::RenderContext,
    mesh::Mesh2D,
    pipeline::{DrawBatch, FlatPipeline},
    scene::{Palette, SceneInstances},
};

use config::AppConfig;
use hud::{Hud, HudAction, HudFrame};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<FlatPipeline>,
    player_mesh: Option<Mesh2D>,
    obstacle_mesh: Option<Mesh2D>,
    hud: Option<Hud>,
    /// The running game simulation
    session: GameSession,
    controller: PlayerController,
    /// Gameplay constants resolved from config
    tuning: Tuning,
    /// Sprite colors resolved from config
    palette: Palette,
    last_frame: std::time::Instant,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let tuning = config.game.to_tuning();
        let palette = config.rendering.to_palette();
        let session = GameSession::new(tuning);

        log::info!(
            "Session ready: spawn every {:.1}s, obstacles fall at {:.2} units/s",
            tuning.spawn_interval,
            tuning.obstacle_speed
        );

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            player_mesh: None,
            obstacle_mesh: None,
            hud: None,
            session,
            controller: PlayerController::new(),
            tuning,
            palette,
            last_frame: std::time::Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));
            if self.config.window.fullscreen {
                window_attributes =
                    window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context
            let render_context = pollster::block_on(RenderContext::new(
                window.clone(),
                self.config.window.vsync,
            ))
            .unwrap_or_else(|e| panic!("Failed to create render context: {}", e));

            // Create pipeline and meshes
            let pipeline = FlatPipeline::new(&render_context.device, render_context.config.format);
            let player_mesh = Mesh2D::quad(
                &render_context.device,
                self.tuning.player_half,
                self.tuning.player_half,
            );
            let obstacle_mesh = Mesh2D::drop_triangle(
                &render_context.device,
                self.tuning.obstacle_half_width,
                self.tuning.obstacle_half_height,
            );

            // Create HUD overlay
            let hud = Hud::new(&window, &render_context.device, render_context.config.format);

            log::info!(
                "Window ready: {}x{}",
                render_context.size.width,
                render_context.size.height
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
            self.player_mesh = Some(player_mesh);
            self.obstacle_mesh = Some(obstacle_mesh);
            self.hud = Some(hud);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Give the HUD first look; events it consumes (clicks on the
        // restart button, mostly) stay out of the game input
        if let (Some(hud), Some(window)) = (&mut self.hud, &self.window) {
            if hud.on_window_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    // Handle special keys on press
                    if event.state == ElementState::Pressed {
                        match key {
                            KeyCode::Escape => {
                                event_loop.exit();
                                return;
                            }
                            KeyCode::KeyF => {
                                if let Some(window) = &self.window {
                                    let new_fullscreen = if window.fullscreen().is_some() {
                                        None
                                    } else {
                                        Some(Fullscreen::Borderless(None))
                                    };
                                    window.set_fullscreen(new_fullscreen);
                                }
                            }
                            _ => {}
                        }
                    }
                    // Pass to controller for steering and restart keys
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                // Calculate delta time
                let now = std::time::Instant::now();
                let raw_dt = (now - self.last_frame).as_secs_f32();
                // Cap dt to prevent huge simulation steps on first frame or after window focus
                let dt = raw_dt.min(1.0 / 30.0); // Max 33ms per frame
                self.last_frame = now;

                // 1. Consume the one-shot restart key
                if self.controller.consume_restart() {
                    self.session.restart();
                }

                // 2. Advance the game world
                self.session.update(dt, self.controller.axis());

                // 3. Mirror the session into instance data
                let scene = SceneInstances::from_session(&self.session, &self.palette);
                if let (Some(pipeline), Some(ctx)) = (&mut self.pipeline, &self.render_context) {
                    pipeline.upload_instances(&ctx.device, &ctx.queue, &scene.instances);
                }

                // 4. Render the frame: game pass, then HUD pass
                if let (Some(ctx), Some(pipeline), Some(player_mesh), Some(obstacle_mesh)) = (
                    &self.render_context,
                    &self.pipeline,
                    &self.player_mesh,
                    &self.obstacle_mesh,
                ) {
                    // Get surface texture
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    // Create command encoder
                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Render Encoder"),
                            });

                    // Game pass
                    let bg = &self.config.rendering.background_color;
                    pipeline.render(
                        &mut encoder,
                        &view,
                        wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
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

                    // HUD pass
                    let hud_frame = HudFrame {
                        score: self.session.score(),
                        best_score: self.session.best_score(),
                        game_over: self.session.is_game_over(),
                    };
                    if let (Some(hud), Some(window)) = (&mut self.hud, &self.window) {
                        let action = hud.draw(
                            window,
                            &ctx.device,
                            &ctx.queue,
                            &mut encoder,
                            &view,
                            ctx.size,
                            &hud_frame,
                        );
                        if action == HudAction::Restart {
                            self.session.restart();
                        }
                    }

                    // Submit
                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Block Dodger");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
