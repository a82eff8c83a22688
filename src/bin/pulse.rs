//! Pulse - a pulsing-circle sketch
//!
//! Draws a breathing circle outline with a small HUD. Space repaints
//! the background with a random color; the HUD tracks the cursor.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use plinth::config::AppConfig;
use plinth_math::{Color, Vec2};
use plinth_render::{BitmapFont, Canvas, RenderContext, ShapePipeline, TextPipeline};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    shape_pipeline: Option<ShapePipeline>,
    text_pipeline: Option<TextPipeline>,
    canvas: Canvas,
    /// Elapsed-time accumulator driving the pulse
    time: f32,
    cursor: Vec2,
    mouse_down: bool,
    background: Color,
    last_frame: Instant,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let background = Color::gray_u8(config.pulse.background_gray);

        Self {
            config,
            window: None,
            render_context: None,
            shape_pipeline: None,
            text_pipeline: None,
            canvas: Canvas::new(),
            time: 0.0,
            cursor: Vec2::ZERO,
            mouse_down: false,
            background,
            last_frame: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.pulse.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::new(window.clone()));
            let font = BitmapFont::new(&render_context.device, &render_context.queue);
            let shape_pipeline =
                ShapePipeline::new(&render_context.device, render_context.config.format);
            let text_pipeline = TextPipeline::new(
                &render_context.device,
                render_context.config.format,
                font.atlas_view(),
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.shape_pipeline = Some(shape_pipeline);
            self.text_pipeline = Some(text_pipeline);
            self.last_frame = Instant::now();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
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
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(KeyCode::Space) = event.physical_key {
                        let mut rng = rand::rng();
                        self.background = Color::rgb_u8(
                            rng.random_range(0..=255),
                            rng.random_range(0..=255),
                            rng.random_range(0..=255),
                        );
                        log::info!("Background repainted");
                    }
                }
            }

            // Covers both hover moves and drags
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_down = state == ElementState::Pressed;
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                // Cap dt so a stall doesn't jump the animation
                let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
                self.last_frame = now;
                self.time += dt;

                let Some(ctx) = &self.render_context else {
                    return;
                };
                let (w, h) = (ctx.size.width as f32, ctx.size.height as f32);

                self.canvas.begin(w, h);

                let hud = Color::gray_u8(240);
                self.canvas.text(
                    &format!("Hello {}!", self.config.pulse.title),
                    Vec2::new(20.0, 22.0),
                    2.0,
                    hud,
                );
                self.canvas.text(
                    &format!("Time: {:.2}", self.time),
                    Vec2::new(20.0, 46.0),
                    2.0,
                    hud,
                );
                self.canvas.text(
                    &format!("Mouse: {}, {}", self.cursor.x as i32, self.cursor.y as i32),
                    Vec2::new(20.0, 70.0),
                    2.0,
                    hud,
                );

                // The breathing circle
                let radius = 100.0 + 50.0 * (self.time * 2.0).sin();
                self.canvas.stroke_circle(
                    Vec2::new(w * 0.5, h * 0.5),
                    radius,
                    120,
                    2.0,
                    hud,
                );

                if let (Some(shapes), Some(texts)) =
                    (&mut self.shape_pipeline, &mut self.text_pipeline)
                {
                    match self.canvas.present(ctx, shapes, texts, self.background) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                        }
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting pulse");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
