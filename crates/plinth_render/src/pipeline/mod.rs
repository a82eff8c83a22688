//! GPU pipelines for 2D drawing
//!
//! Two alpha-blended triangle-list pipelines: solid shapes and atlas
//! text. Both take pre-transformed NDC vertices from [`crate::Canvas`].

pub mod types;
mod shape;
mod text;

pub use types::{GlyphVertex, ShapeVertex};
pub use shape::ShapePipeline;
pub use text::TextPipeline;
