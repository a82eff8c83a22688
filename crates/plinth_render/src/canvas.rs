//! Immediate-mode 2D drawing surface
//!
//! The canvas accumulates primitives in pixel coordinates (origin
//! top-left, y down) each frame, converting to NDC as vertices are
//! pushed. `begin` clears the batches, the draw calls append, and
//! `present` uploads both batches and submits one render pass.

use plinth_math::{Color, Rect, Vec2};

use crate::context::RenderContext;
use crate::pipeline::{GlyphVertex, ShapePipeline, ShapeVertex, TextPipeline};
use crate::text;

/// 2D drawing surface batching into the shape and text pipelines
pub struct Canvas {
    shape_vertices: Vec<ShapeVertex>,
    glyph_vertices: Vec<GlyphVertex>,
    width: f32,
    height: f32,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            shape_vertices: Vec::new(),
            glyph_vertices: Vec::new(),
            width: 1.0,
            height: 1.0,
        }
    }

    /// Start a new frame at the given pixel dimensions
    pub fn begin(&mut self, width: f32, height: f32) {
        self.shape_vertices.clear();
        self.glyph_vertices.clear();
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Convert a pixel-space point to NDC
    #[inline]
    fn ndc(&self, p: Vec2) -> [f32; 2] {
        [
            p.x / self.width * 2.0 - 1.0,
            1.0 - p.y / self.height * 2.0,
        ]
    }

    fn push_quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
        let col = color.to_array();
        let (a, b, c, d) = (self.ndc(a), self.ndc(b), self.ndc(c), self.ndc(d));
        self.shape_vertices.push(ShapeVertex::new(a, col));
        self.shape_vertices.push(ShapeVertex::new(b, col));
        self.shape_vertices.push(ShapeVertex::new(c, col));
        self.shape_vertices.push(ShapeVertex::new(a, col));
        self.shape_vertices.push(ShapeVertex::new(c, col));
        self.shape_vertices.push(ShapeVertex::new(d, col));
    }

    /// Filled rectangle
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push_quad(
            Vec2::new(rect.left(), rect.top()),
            Vec2::new(rect.right(), rect.top()),
            Vec2::new(rect.right(), rect.bottom()),
            Vec2::new(rect.left(), rect.bottom()),
            color,
        );
    }

    /// Rectangle outline with the given stroke weight (drawn inward)
    pub fn stroke_rect(&mut self, rect: Rect, weight: f32, color: Color) {
        let w = weight.min(rect.w * 0.5).min(rect.h * 0.5);
        // Top, bottom, left, right strips
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, w), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - w, rect.w, w), color);
        self.fill_rect(Rect::new(rect.x, rect.y + w, w, rect.h - w * 2.0), color);
        self.fill_rect(
            Rect::new(rect.right() - w, rect.y + w, w, rect.h - w * 2.0),
            color,
        );
    }

    /// Line segment with the given weight
    pub fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Color) {
        let dir = (to - from).normalized();
        if dir == Vec2::ZERO {
            return;
        }
        let half = dir.perp() * (weight * 0.5);
        self.push_quad(from + half, to + half, to - half, from - half, color);
    }

    /// Filled circle as a triangle fan
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        let segments = segments.max(3);
        let col = color.to_array();
        let c = self.ndc(center);
        let step = std::f32::consts::TAU / segments as f32;
        for i in 0..segments {
            let a0 = i as f32 * step;
            let a1 = (i + 1) as f32 * step;
            let p0 = self.ndc(center + Vec2::new(a0.cos(), a0.sin()) * radius);
            let p1 = self.ndc(center + Vec2::new(a1.cos(), a1.sin()) * radius);
            self.shape_vertices.push(ShapeVertex::new(c, col));
            self.shape_vertices.push(ShapeVertex::new(p0, col));
            self.shape_vertices.push(ShapeVertex::new(p1, col));
        }
    }

    /// Circle outline as a ring of quads
    pub fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        segments: u32,
        weight: f32,
        color: Color,
    ) {
        let segments = segments.max(3);
        let inner = (radius - weight * 0.5).max(0.0);
        let outer = radius + weight * 0.5;
        let step = std::f32::consts::TAU / segments as f32;
        for i in 0..segments {
            let a0 = i as f32 * step;
            let a1 = (i + 1) as f32 * step;
            let d0 = Vec2::new(a0.cos(), a0.sin());
            let d1 = Vec2::new(a1.cos(), a1.sin());
            self.push_quad(
                center + d0 * outer,
                center + d1 * outer,
                center + d1 * inner,
                center + d0 * inner,
                color,
            );
        }
    }

    /// Text run at the given top-left position and integer-ish scale
    ///
    /// Monospace: every glyph advances 8 * scale pixels.
    pub fn text(&mut self, s: &str, pos: Vec2, scale: f32, color: Color) {
        let col = color.to_array();
        let glyph = text::GLYPH_SIZE as f32 * scale;
        let mut x = pos.x;
        for ch in s.chars() {
            if ch != ' ' {
                let (uv_min, uv_max) = text::glyph_uv(ch);
                let tl = self.ndc(Vec2::new(x, pos.y));
                let tr = self.ndc(Vec2::new(x + glyph, pos.y));
                let br = self.ndc(Vec2::new(x + glyph, pos.y + glyph));
                let bl = self.ndc(Vec2::new(x, pos.y + glyph));
                let (u0, v0) = (uv_min[0], uv_min[1]);
                let (u1, v1) = (uv_max[0], uv_max[1]);
                self.glyph_vertices.push(GlyphVertex::new(tl, [u0, v0], col));
                self.glyph_vertices.push(GlyphVertex::new(tr, [u1, v0], col));
                self.glyph_vertices.push(GlyphVertex::new(br, [u1, v1], col));
                self.glyph_vertices.push(GlyphVertex::new(tl, [u0, v0], col));
                self.glyph_vertices.push(GlyphVertex::new(br, [u1, v1], col));
                self.glyph_vertices.push(GlyphVertex::new(bl, [u0, v1], col));
            }
            x += glyph;
        }
    }

    /// Exact pixel size of a text run at the given scale
    pub fn measure_text(&self, s: &str, scale: f32) -> Vec2 {
        text::measure(s, scale)
    }

    /// Upload the batches and submit one render pass over the surface
    pub fn present(
        &self,
        ctx: &RenderContext,
        shapes: &mut ShapePipeline,
        texts: &mut TextPipeline,
        clear: Color,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        shapes.upload(&ctx.device, &ctx.queue, &self.shape_vertices);
        texts.upload(&ctx.device, &ctx.queue, &self.glyph_vertices);

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Canvas Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            shapes.draw(&mut render_pass);
            texts.draw(&mut render_pass);
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        let mut c = Canvas::new();
        c.begin(800.0, 600.0);
        c
    }

    #[test]
    fn test_ndc_conversion() {
        let c = canvas();
        assert_eq!(c.ndc(Vec2::new(0.0, 0.0)), [-1.0, 1.0]);
        assert_eq!(c.ndc(Vec2::new(800.0, 600.0)), [1.0, -1.0]);
        assert_eq!(c.ndc(Vec2::new(400.0, 300.0)), [0.0, 0.0]);
    }

    #[test]
    fn test_fill_rect_vertex_count() {
        let mut c = canvas();
        c.fill_rect(Rect::new(10.0, 10.0, 100.0, 50.0), Color::WHITE);
        assert_eq!(c.shape_vertices.len(), 6);
    }

    #[test]
    fn test_stroke_rect_is_four_strips() {
        let mut c = canvas();
        c.stroke_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 2.0, Color::WHITE);
        assert_eq!(c.shape_vertices.len(), 4 * 6);
    }

    #[test]
    fn test_circle_vertex_counts() {
        let mut c = canvas();
        c.fill_circle(Vec2::new(100.0, 100.0), 50.0, 120, Color::WHITE);
        assert_eq!(c.shape_vertices.len(), 120 * 3);

        c.begin(800.0, 600.0);
        c.stroke_circle(Vec2::new(100.0, 100.0), 50.0, 120, 2.0, Color::WHITE);
        assert_eq!(c.shape_vertices.len(), 120 * 6);
    }

    #[test]
    fn test_degenerate_segments_clamped() {
        let mut c = canvas();
        c.fill_circle(Vec2::new(0.0, 0.0), 10.0, 0, Color::WHITE);
        // Clamped to a triangle, not an empty fan
        assert_eq!(c.shape_vertices.len(), 3 * 3);
    }

    #[test]
    fn test_text_skips_spaces() {
        let mut c = canvas();
        c.text("a b", Vec2::new(0.0, 0.0), 2.0, Color::WHITE);
        // Two glyph quads; the space only advances the cursor
        assert_eq!(c.glyph_vertices.len(), 2 * 6);
    }

    #[test]
    fn test_zero_length_line_is_dropped() {
        let mut c = canvas();
        c.line(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 2.0, Color::WHITE);
        assert!(c.shape_vertices.is_empty());
    }

    #[test]
    fn test_begin_clears_batches() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        c.text("hi", Vec2::new(0.0, 0.0), 1.0, Color::WHITE);
        c.begin(800.0, 600.0);
        assert!(c.shape_vertices.is_empty());
        assert!(c.glyph_vertices.is_empty());
    }
}
