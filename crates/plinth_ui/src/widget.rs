//! Widget behavior seam

use plinth_math::{Rect, Vec2};
use plinth_render::Canvas;

/// A rectangular control inside a panel
///
/// Mouse handlers return whether the event was handled, so the caller
/// can stop routing once a widget claims it.
pub trait Widget {
    /// Place the widget
    fn set_rect(&mut self, rect: Rect);

    /// Current placement
    fn rect(&self) -> Rect;

    /// Draw into the current canvas frame
    fn draw(&self, canvas: &mut Canvas);

    /// Track hover state
    fn mouse_moved(&mut self, pos: Vec2);

    /// Returns true if the press landed on this widget
    fn mouse_pressed(&mut self, pos: Vec2) -> bool;

    /// Returns true if the release completed an interaction
    fn mouse_released(&mut self, pos: Vec2) -> bool;
}
