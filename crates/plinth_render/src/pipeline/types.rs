//! GPU-compatible vertex types for the 2D pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A solid-color vertex in normalized device coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Position in NDC (x right, y up)
    pub pos: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl ShapeVertex {
    pub fn new(pos: [f32; 2], color: [f32; 4]) -> Self {
        Self { pos, color }
    }

    /// Vertex buffer layout matching shape.wgsl
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// A textured glyph vertex in normalized device coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlyphVertex {
    /// Position in NDC (x right, y up)
    pub pos: [f32; 2],
    /// Atlas texture coordinates
    pub uv: [f32; 2],
    /// RGBA color (glyph coverage modulates alpha)
    pub color: [f32; 4],
}

impl GlyphVertex {
    pub fn new(pos: [f32; 2], uv: [f32; 2], color: [f32; 4]) -> Self {
        Self { pos, uv, color }
    }

    /// Vertex buffer layout matching text.wgsl
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_shape_vertex_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<ShapeVertex>(), 24);
    }

    #[test]
    fn test_glyph_vertex_size() {
        // 2 floats position + 2 floats uv + 4 floats color = 32 bytes
        assert_eq!(size_of::<GlyphVertex>(), 32);
    }

    #[test]
    fn test_alignment() {
        // All vertex types should be 4-byte aligned (f32 alignment)
        assert_eq!(std::mem::align_of::<ShapeVertex>(), 4);
        assert_eq!(std::mem::align_of::<GlyphVertex>(), 4);
    }
}
