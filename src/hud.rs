//! Score and game-over overlay rendered with egui
//!
//! The HUD draws on top of the game surface in a second render pass.
//! It owns the egui context, the winit integration state, and the
//! wgpu renderer; the frame loop feeds it a [`HudFrame`] snapshot and
//! applies whatever [`HudAction`] comes back.

use winit::event::WindowEvent;
use winit::window::Window;

/// Action requested by the player through the HUD
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudAction {
    None,
    Restart,
}

/// Snapshot of the session state the HUD displays
#[derive(Clone, Copy, Debug)]
pub struct HudFrame {
    /// Seconds survived this run
    pub score: f32,
    /// Best survival time this process
    pub best_score: f32,
    /// Whether the run has ended
    pub game_over: bool,
}

/// Egui-based overlay for score display and the game-over screen
pub struct Hud {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Hud {
    /// Create the HUD for the given window and surface format
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Feed a window event to egui
    ///
    /// Returns true if egui consumed the event; consumed events must
    /// not reach the game's input handling.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the HUD ui and record its draw commands
    ///
    /// Must be called after the game pass so the overlay loads (not
    /// clears) the surface.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        window: &Window,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size: winit::dpi::PhysicalSize<u32>,
        frame: &HudFrame,
    ) -> HudAction {
        let raw_input = self.state.take_egui_input(window);

        let mut action = HudAction::None;
        let full_output = self.ctx.run(raw_input, |ctx| {
            action = render_hud(ctx, frame);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        let tris = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }

        self.renderer
            .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Hud Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut render_pass_static = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        action
    }
}

/// Build the HUD windows for one frame
fn render_hud(ctx: &egui::Context, frame: &HudFrame) -> HudAction {
    let mut action = HudAction::None;

    egui::Window::new("score")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("Score: {:.1}", frame.score))
                    .size(16.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(format!("Best: {:.1}", frame.best_score))
                    .size(12.0)
                    .weak(),
            );
        });

    if frame.game_over {
        egui::Window::new("game_over")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Game Over")
                            .size(24.0)
                            .color(egui::Color32::YELLOW)
                            .strong(),
                    );
                    ui.add_space(8.0);
                    ui.label(format!("You survived {:.1} s", frame.score));
                    ui.label(format!("Best: {:.1} s", frame.best_score));
                    ui.add_space(8.0);
                    if ui.button("Restart").clicked() {
                        action = HudAction::Restart;
                    }
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new("Press R to restart").weak().small());
                });
            });
    }

    action
}
