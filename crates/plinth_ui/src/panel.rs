//! Settings panel

use plinth_math::{Color, Rect, Vec2};
use plinth_render::Canvas;

use crate::widget::Widget;

const HEADER_H: f32 = 24.0;
const ROW_H: f32 = 26.0;
const PADDING: f32 = 6.0;

/// Title bar plus vertically stacked widget rows
///
/// The panel owns placement only; the widgets themselves are owned by
/// the app and passed in for layout, drawing, and event routing.
pub struct Panel {
    title: String,
    pos: Vec2,
    width: f32,
    height: f32,
}

impl Panel {
    pub fn new(title: impl Into<String>, width: f32) -> Self {
        Self {
            title: title.into(),
            pos: Vec2::ZERO,
            width,
            height: HEADER_H,
        }
    }

    /// Move the panel's top-left corner
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Stack the widgets under the title bar, one per row
    pub fn layout(&mut self, widgets: &mut [&mut dyn Widget]) {
        let mut y = self.pos.y + HEADER_H + PADDING;
        for widget in widgets.iter_mut() {
            widget.set_rect(Rect::new(
                self.pos.x + PADDING,
                y,
                self.width - PADDING * 2.0,
                ROW_H - PADDING,
            ));
            y += ROW_H;
        }
        self.height = (y - self.pos.y) + PADDING;
    }

    /// Panel bounds from the last layout
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Draw the background, title bar, and all widgets
    pub fn draw(&self, canvas: &mut Canvas, widgets: &[&dyn Widget]) {
        let bounds = self.bounds();
        canvas.fill_rect(bounds, Color::gray_u8(30).with_alpha(0.95));
        canvas.stroke_rect(bounds, 1.0, Color::gray_u8(90));

        let header = Rect::new(bounds.x, bounds.y, bounds.w, HEADER_H);
        canvas.fill_rect(header, Color::gray_u8(55));
        canvas.text(
            &self.title,
            Vec2::new(header.x + PADDING, header.y + 4.0),
            2.0,
            Color::gray_u8(240),
        );

        for widget in widgets {
            widget.draw(canvas);
        }
    }

    /// Track hover on all widgets
    pub fn handle_mouse_moved(&self, pos: Vec2, widgets: &mut [&mut dyn Widget]) {
        for widget in widgets.iter_mut() {
            widget.mouse_moved(pos);
        }
    }

    /// Route a press to the widgets; presses on the panel background are
    /// consumed so they don't fall through to the app
    pub fn handle_mouse_pressed(&self, pos: Vec2, widgets: &mut [&mut dyn Widget]) -> bool {
        for widget in widgets.iter_mut() {
            if widget.mouse_pressed(pos) {
                return true;
            }
        }
        self.bounds().contains(pos)
    }

    /// Route a release to the widgets
    pub fn handle_mouse_released(&self, pos: Vec2, widgets: &mut [&mut dyn Widget]) -> bool {
        let mut handled = false;
        for widget in widgets.iter_mut() {
            handled |= widget.mouse_released(pos);
        }
        handled || self.bounds().contains(pos)
    }
}
