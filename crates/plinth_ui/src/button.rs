//! Push button

use plinth_math::{Color, Rect, Vec2};
use plinth_render::Canvas;

use crate::widget::Widget;

/// Click fires on press-inside followed by release-inside; releasing
/// outside cancels the armed press.
pub struct Button {
    label: String,
    rect: Rect,
    hovered: bool,
    armed: bool,
    clicked: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rect: Rect::ZERO,
            hovered: false,
            armed: false,
            clicked: false,
        }
    }

    /// Consume the pending click edge
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Button {
    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw(&self, canvas: &mut Canvas) {
        let fill = if self.armed {
            Color::gray_u8(90)
        } else if self.hovered {
            Color::gray_u8(70)
        } else {
            Color::gray_u8(50)
        };
        canvas.fill_rect(self.rect, fill);
        canvas.stroke_rect(self.rect, 1.0, Color::gray_u8(120));

        let size = canvas.measure_text(&self.label, 2.0);
        let pos = Vec2::new(
            self.rect.center().x - size.x * 0.5,
            self.rect.center().y - size.y * 0.5,
        );
        canvas.text(&self.label, pos, 2.0, Color::gray_u8(230));
    }

    fn mouse_moved(&mut self, pos: Vec2) {
        self.hovered = self.rect.contains(pos);
    }

    fn mouse_pressed(&mut self, pos: Vec2) -> bool {
        if self.rect.contains(pos) {
            self.armed = true;
            true
        } else {
            false
        }
    }

    fn mouse_released(&mut self, pos: Vec2) -> bool {
        let was_armed = std::mem::take(&mut self.armed);
        if was_armed && self.rect.contains(pos) {
            self.clicked = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        let mut b = Button::new("Refresh Scan");
        b.set_rect(Rect::new(10.0, 10.0, 100.0, 24.0));
        b
    }

    #[test]
    fn test_click_lifecycle() {
        let mut b = button();
        let inside = Vec2::new(50.0, 20.0);
        assert!(b.mouse_pressed(inside));
        assert!(b.mouse_released(inside));
        assert!(b.take_clicked());
        // Edge is consumed
        assert!(!b.take_clicked());
    }

    #[test]
    fn test_release_outside_cancels() {
        let mut b = button();
        assert!(b.mouse_pressed(Vec2::new(50.0, 20.0)));
        assert!(!b.mouse_released(Vec2::new(500.0, 500.0)));
        assert!(!b.take_clicked());
    }

    #[test]
    fn test_press_outside_does_not_arm() {
        let mut b = button();
        assert!(!b.mouse_pressed(Vec2::new(500.0, 500.0)));
        assert!(!b.mouse_released(Vec2::new(50.0, 20.0)));
        assert!(!b.take_clicked());
    }

    #[test]
    fn test_hover_tracking() {
        let mut b = button();
        b.mouse_moved(Vec2::new(50.0, 20.0));
        assert!(b.hovered);
        b.mouse_moved(Vec2::new(500.0, 500.0));
        assert!(!b.hovered);
    }
}
