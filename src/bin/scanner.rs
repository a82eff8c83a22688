//! System Scanner - a 12-cell host-info dashboard
//!
//! Polls coarse host information (audio capability, graphics adapter,
//! CPU/RAM, internet reachability) on the probe worker and renders it
//! into a grid of module boxes. A settings strip at the bottom holds a
//! refresh button and an auto-refresh toggle.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use plinth::config::AppConfig;
use plinth_math::{Color, GridLayout, Rect, Vec2};
use plinth_probe::{GraphicsSnapshot, ProbeWorker, ScanMask, ScanTimer, SystemReport};
use plinth_render::{BitmapFont, Canvas, RenderContext, ShapePipeline, TextPipeline};
use plinth_ui::{Button, Panel, Toggle};

const PANEL_WIDTH: f32 = 260.0;
/// Vertical advance between content lines inside a module box
const LINE_SPACING: f32 = 18.0;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    shape_pipeline: Option<ShapePipeline>,
    text_pipeline: Option<TextPipeline>,
    canvas: Canvas,
    /// Latest merged probe readings
    report: SystemReport,
    grid: GridLayout,
    panel: Panel,
    refresh_button: Button,
    auto_toggle: Toggle,
    worker: ProbeWorker,
    scan_timer: ScanTimer,
    network_timer: ScanTimer,
    /// Adapter/monitor data captured once at startup
    graphics_snapshot: Option<GraphicsSnapshot>,
    /// Last cursor position; MouseInput events carry no coordinates
    cursor: Vec2,
    background: Color,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let now = Instant::now();
        let worker = ProbeWorker::new(config.network.to_probe_target());
        let scan_timer = ScanTimer::new(
            std::time::Duration::from_secs_f32(config.scan.interval_secs),
            now,
        );
        let network_timer = ScanTimer::new(
            std::time::Duration::from_secs_f32(config.scan.network_interval_secs),
            now,
        );

        let grid = GridLayout::compute(
            config.window.width as f32,
            config.window.height as f32,
            config.grid.cols,
            config.grid.rows,
            config.grid.margin,
            config.grid.footer_height,
        );

        let background = Color::gray_u8(config.scanner.background_gray);
        let auto_refresh = config.scanner.auto_refresh;

        Self {
            config,
            window: None,
            render_context: None,
            shape_pipeline: None,
            text_pipeline: None,
            canvas: Canvas::new(),
            report: SystemReport::new(),
            grid,
            panel: Panel::new("System Scanner Controls", PANEL_WIDTH),
            refresh_button: Button::new("Refresh Scan"),
            auto_toggle: Toggle::new("Auto Refresh", auto_refresh),
            worker,
            scan_timer,
            network_timer,
            graphics_snapshot: None,
            cursor: Vec2::ZERO,
            background,
        }
    }

    /// Recompute the grid for a window size and re-place the panel in
    /// the footer strip (right side; status text goes on the left)
    fn relayout(&mut self, width: f32, height: f32) {
        self.grid = GridLayout::compute(
            width,
            height,
            self.config.grid.cols,
            self.config.grid.rows,
            self.config.grid.margin,
            self.config.grid.footer_height,
        );
        let footer = self.grid.footer_rect();
        self.panel.move_to(Vec2::new(
            (width - self.config.grid.margin - PANEL_WIDTH).max(0.0),
            footer.y + 6.0,
        ));
        self.panel
            .layout(&mut [&mut self.refresh_button, &mut self.auto_toggle]);
    }

    /// Request a full scan and restart the auto-refresh interval
    fn request_full_scan(&mut self, now: Instant) {
        self.worker
            .request(ScanMask::ALL, self.graphics_snapshot.clone());
        self.scan_timer.reset(now);
        self.network_timer.reset(now);
    }

    /// Content for the module box at a flat grid index
    fn module_content(&self, index: u32) -> (String, Vec<String>, bool) {
        match index {
            0 => (
                "AUDIO MODULE".to_string(),
                self.report.audio.clone(),
                !self.report.audio.is_empty(),
            ),
            1 => (
                "GRAPHICS MODULE".to_string(),
                self.report.graphics.clone(),
                !self.report.graphics.is_empty(),
            ),
            2 => (
                "CPU MODULE".to_string(),
                self.report.cpu.clone(),
                !self.report.cpu.is_empty(),
            ),
            3 => (
                "NETWORK MODULE".to_string(),
                self.report.network.clone(),
                self.report.internet_connected,
            ),
            n => (
                format!("MODULE {}", n + 1),
                vec!["Ready for".to_string(), "development".to_string()],
                false,
            ),
        }
    }

    fn draw_module_box(
        canvas: &mut Canvas,
        rect: Rect,
        title: &str,
        lines: &[String],
        active: bool,
    ) {
        canvas.fill_rect(rect, Color::gray_u8(if active { 40 } else { 25 }));
        canvas.stroke_rect(rect, 1.0, Color::gray_u8(if active { 100 } else { 60 }));

        canvas.text(
            title,
            Vec2::new(rect.x + 10.0, rect.y + 10.0),
            2.0,
            Color::gray_u8(if active { 255 } else { 150 }),
        );

        // Content lines, clipped to the box
        let content = Color::gray_u8(if active { 200 } else { 100 });
        let mut line_y = rect.y + 34.0;
        for line in lines {
            if line_y + 16.0 > rect.bottom() - 10.0 {
                break;
            }
            canvas.text(line, Vec2::new(rect.x + 10.0, line_y), 2.0, content);
            line_y += LINE_SPACING;
        }

        // Status indicator
        let dot = if active { Color::GREEN } else { Color::GRAY };
        canvas.fill_circle(
            Vec2::new(rect.right() - 15.0, rect.y + 15.0),
            5.0,
            24,
            dot,
        );
    }

    fn draw_frame(&mut self, width: f32, height: f32, now: Instant) {
        self.canvas.begin(width, height);

        for index in 0..self.grid.cell_count() {
            let rect = self.grid.cell_rect_at(index);
            let (title, lines, active) = self.module_content(index);
            Self::draw_module_box(&mut self.canvas, rect, &title, &lines, active);
        }

        // Footer status lines, left of the panel
        let margin = self.config.grid.margin;
        let status = Color::gray_u8(200);
        self.canvas.text(
            "System Scanner - Interactive Installation Scanner",
            Vec2::new(margin, height - 76.0),
            2.0,
            status,
        );
        self.canvas.text(
            &format!("Last scan: {:.1}s ago", self.scan_timer.elapsed_secs(now)),
            Vec2::new(margin, height - 52.0),
            2.0,
            status,
        );
        self.canvas.text(
            "Press SPACE to refresh scan | ESC to exit",
            Vec2::new(margin, height - 28.0),
            2.0,
            status,
        );

        self.panel
            .draw(&mut self.canvas, &[&self.refresh_button, &self.auto_toggle]);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.scanner.title)
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

            // Adapter and monitor readings are main-thread data; capture
            // them once and hand them to the worker with each request
            let info = render_context.adapter_info();
            let screen = window.current_monitor().map(|m| {
                let size = m.size();
                (size.width, size.height)
            });
            self.graphics_snapshot = Some(GraphicsSnapshot {
                renderer: info.name.clone(),
                backend: format!("{:?}", info.backend),
                driver: info.driver_info.clone(),
                screen,
            });

            let size = window.inner_size();
            self.relayout(size.width as f32, size.height as f32);

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.shape_pipeline = Some(shape_pipeline);
            self.text_pipeline = Some(text_pipeline);

            // Initial full scan
            self.request_full_scan(Instant::now());
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
                self.relayout(physical_size.width as f32, physical_size.height as f32);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Space) => {
                            log::info!("Manual scan requested");
                            self.request_full_scan(Instant::now());
                        }
                        PhysicalKey::Code(KeyCode::Escape) => {
                            event_loop.exit();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.panel.handle_mouse_moved(
                    self.cursor,
                    &mut [&mut self.refresh_button, &mut self.auto_toggle],
                );
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button != MouseButton::Left {
                    return;
                }
                let pos = self.cursor;
                match state {
                    ElementState::Pressed => {
                        self.panel.handle_mouse_pressed(
                            pos,
                            &mut [&mut self.refresh_button, &mut self.auto_toggle],
                        );
                    }
                    ElementState::Released => {
                        self.panel.handle_mouse_released(
                            pos,
                            &mut [&mut self.refresh_button, &mut self.auto_toggle],
                        );
                        if self.refresh_button.take_clicked() {
                            log::info!("Refresh button clicked");
                            self.request_full_scan(Instant::now());
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();

                // Merge finished scans
                for update in self.worker.poll_all() {
                    let full = update.is_full();
                    self.report.apply(update);
                    if full {
                        log::info!("Scan complete: {}", self.report.summary());
                    }
                }

                // Auto-refresh and the faster network re-check
                if self.auto_toggle.value() && self.scan_timer.due(now) {
                    self.worker
                        .request(ScanMask::ALL, self.graphics_snapshot.clone());
                    self.scan_timer.reset(now);
                }
                if self.network_timer.due(now) {
                    self.worker.request(ScanMask::NETWORK, None);
                    self.network_timer.reset(now);
                }

                let Some(ctx) = &self.render_context else {
                    return;
                };
                let (w, h) = (ctx.size.width as f32, ctx.size.height as f32);
                self.draw_frame(w, h, now);

                if let (Some(ctx), Some(shapes), Some(texts)) = (
                    &self.render_context,
                    &mut self.shape_pipeline,
                    &mut self.text_pipeline,
                ) {
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
    log::info!("Starting scanner");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
