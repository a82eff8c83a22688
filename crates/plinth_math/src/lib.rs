//! 2D Mathematics Library
//!
//! This crate provides the screen-space primitives shared by the plinth
//! renderer, widgets, and apps.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector for positions and sizes
//! - [`Rect`] - axis-aligned rectangle (origin top-left, y down)
//! - [`Color`] - RGBA color in the 0.0-1.0 range
//!
//! ## Layout
//!
//! - [`GridLayout`] - margin-separated cell grid with a reserved footer strip

mod vec2;
mod rect;
mod color;
pub mod grid;

pub use vec2::Vec2;
pub use rect::Rect;
pub use color::Color;
pub use grid::GridLayout;
