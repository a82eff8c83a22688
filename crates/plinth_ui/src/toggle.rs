//! Checkbox toggle

use plinth_math::{Color, Rect, Vec2};
use plinth_render::Canvas;

use crate::widget::Widget;

/// Flips its value on press inside; rendered as a checkbox square plus
/// label.
pub struct Toggle {
    label: String,
    rect: Rect,
    value: bool,
    hovered: bool,
}

impl Toggle {
    pub fn new(label: impl Into<String>, value: bool) -> Self {
        Self {
            label: label.into(),
            rect: Rect::ZERO,
            value,
            hovered: false,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Toggle {
    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw(&self, canvas: &mut Canvas) {
        let fill = if self.hovered {
            Color::gray_u8(70)
        } else {
            Color::gray_u8(50)
        };
        canvas.fill_rect(self.rect, fill);
        canvas.stroke_rect(self.rect, 1.0, Color::gray_u8(120));

        // Checkbox square at the left edge
        let box_size = self.rect.h - 8.0;
        let check_rect = Rect::new(
            self.rect.x + 4.0,
            self.rect.y + 4.0,
            box_size,
            box_size,
        );
        canvas.stroke_rect(check_rect, 1.0, Color::gray_u8(180));
        if self.value {
            canvas.fill_rect(check_rect.inset(3.0), Color::GREEN);
        }

        let size = canvas.measure_text(&self.label, 2.0);
        let pos = Vec2::new(
            check_rect.right() + 8.0,
            self.rect.center().y - size.y * 0.5,
        );
        canvas.text(&self.label, pos, 2.0, Color::gray_u8(230));
    }

    fn mouse_moved(&mut self, pos: Vec2) {
        self.hovered = self.rect.contains(pos);
    }

    fn mouse_pressed(&mut self, pos: Vec2) -> bool {
        if self.rect.contains(pos) {
            self.value = !self.value;
            true
        } else {
            false
        }
    }

    fn mouse_released(&mut self, _pos: Vec2) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> Toggle {
        let mut t = Toggle::new("Auto Refresh", true);
        t.set_rect(Rect::new(10.0, 10.0, 120.0, 24.0));
        t
    }

    #[test]
    fn test_default_value_preserved() {
        assert!(toggle().value());
        assert!(!Toggle::new("Off", false).value());
    }

    #[test]
    fn test_press_inside_flips() {
        let mut t = toggle();
        assert!(t.mouse_pressed(Vec2::new(50.0, 20.0)));
        assert!(!t.value());
        assert!(t.mouse_pressed(Vec2::new(50.0, 20.0)));
        assert!(t.value());
    }

    #[test]
    fn test_press_outside_ignored() {
        let mut t = toggle();
        assert!(!t.mouse_pressed(Vec2::new(500.0, 500.0)));
        assert!(t.value());
    }

    #[test]
    fn test_set_value() {
        let mut t = toggle();
        t.set_value(false);
        assert!(!t.value());
    }
}
