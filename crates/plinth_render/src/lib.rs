//! 2D Rendering Library
//!
//! This crate provides the wgpu-based immediate-mode 2D renderer the
//! plinth apps draw with.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`canvas::Canvas`] - immediate-mode 2D drawing surface (pixel coordinates in)
//! - [`text::BitmapFont`] - 8x8 bitmap glyph atlas for monospace text
//! - [`pipeline::ShapePipeline`] / [`pipeline::TextPipeline`] - the two
//!   alpha-blended GPU pipelines the canvas submits to

pub mod context;
pub mod canvas;
pub mod pipeline;
pub mod text;

pub use context::RenderContext;
pub use canvas::Canvas;
pub use pipeline::{ShapePipeline, TextPipeline};
pub use text::BitmapFont;

// Re-export math types for convenience
pub use plinth_math::{Color, Rect, Vec2};
