//! Margin-separated cell grid layout

use serde::{Serialize, Deserialize};

use crate::{Rect, Vec2};

/// Layout for a grid of equally sized cells separated by a fixed margin,
/// with a strip of reserved height at the bottom of the window.
///
/// Cell sizes are derived from the window size:
///
/// ```text
/// box_w = (window_w - margin * (cols + 1)) / cols
/// box_h = (window_h - margin * (rows + 1) - footer_h) / rows
/// ```
///
/// Recompute on every window resize; the margin and counts stay fixed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
    pub margin: f32,
    pub footer_h: f32,
    pub box_w: f32,
    pub box_h: f32,
    window_w: f32,
    window_h: f32,
}

impl GridLayout {
    /// Compute the layout for a window size.
    ///
    /// Degenerate window sizes clamp the cell dimensions at zero rather
    /// than going negative.
    pub fn compute(
        window_w: f32,
        window_h: f32,
        cols: u32,
        rows: u32,
        margin: f32,
        footer_h: f32,
    ) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let box_w = ((window_w - margin * (cols + 1) as f32) / cols as f32).max(0.0);
        let box_h = ((window_h - margin * (rows + 1) as f32 - footer_h) / rows as f32).max(0.0);
        Self {
            cols,
            rows,
            margin,
            footer_h,
            box_w,
            box_h,
            window_w,
            window_h,
        }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.cols * self.rows
    }

    /// Rectangle of the cell at (row, col)
    #[inline]
    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        let x = self.margin + col as f32 * (self.box_w + self.margin);
        let y = self.margin + row as f32 * (self.box_h + self.margin);
        Rect::new(x, y, self.box_w, self.box_h)
    }

    /// Rectangle of the cell at a flat index (row-major)
    #[inline]
    pub fn cell_rect_at(&self, index: u32) -> Rect {
        self.cell_rect(index / self.cols, index % self.cols)
    }

    /// The reserved strip at the bottom of the window
    #[inline]
    pub fn footer_rect(&self) -> Rect {
        Rect::new(
            0.0,
            (self.window_h - self.footer_h).max(0.0),
            self.window_w,
            self.footer_h,
        )
    }

    /// Window size the layout was computed for
    #[inline]
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_w, self.window_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_arithmetic() {
        // 4 cols, 3 rows, margin 20, 100px footer at 1024x768
        let grid = GridLayout::compute(1024.0, 768.0, 4, 3, 20.0, 100.0);
        // box_w = (1024 - 20*5) / 4 = 231
        assert_eq!(grid.box_w, 231.0);
        // box_h = (768 - 20*4 - 100) / 3 = 196
        assert_eq!(grid.box_h, 196.0);
        assert_eq!(grid.cell_count(), 12);
    }

    #[test]
    fn test_cell_positions() {
        let grid = GridLayout::compute(1024.0, 768.0, 4, 3, 20.0, 100.0);
        let first = grid.cell_rect(0, 0);
        assert_eq!(first.x, 20.0);
        assert_eq!(first.y, 20.0);

        let second = grid.cell_rect(0, 1);
        assert_eq!(second.x, 20.0 + grid.box_w + 20.0);
        assert_eq!(second.y, 20.0);

        let below = grid.cell_rect(1, 0);
        assert_eq!(below.x, 20.0);
        assert_eq!(below.y, 20.0 + grid.box_h + 20.0);
    }

    #[test]
    fn test_flat_index_is_row_major() {
        let grid = GridLayout::compute(1024.0, 768.0, 4, 3, 20.0, 100.0);
        assert_eq!(grid.cell_rect_at(0), grid.cell_rect(0, 0));
        assert_eq!(grid.cell_rect_at(3), grid.cell_rect(0, 3));
        assert_eq!(grid.cell_rect_at(4), grid.cell_rect(1, 0));
        assert_eq!(grid.cell_rect_at(11), grid.cell_rect(2, 3));
    }

    #[test]
    fn test_resize_recomputes_cells() {
        let before = GridLayout::compute(1024.0, 768.0, 4, 3, 20.0, 100.0);
        let after = GridLayout::compute(1600.0, 900.0, 4, 3, 20.0, 100.0);
        assert_eq!(after.box_w, (1600.0 - 20.0 * 5.0) / 4.0);
        assert_eq!(after.box_h, (900.0 - 20.0 * 4.0 - 100.0) / 3.0);
        assert!(after.box_w > before.box_w);
        // Margins and counts are unchanged by a resize
        assert_eq!(after.margin, before.margin);
        assert_eq!(after.cell_count(), before.cell_count());
    }

    #[test]
    fn test_degenerate_window_clamps_at_zero() {
        let tiny = GridLayout::compute(50.0, 50.0, 4, 3, 20.0, 100.0);
        assert_eq!(tiny.box_w, 0.0);
        assert_eq!(tiny.box_h, 0.0);
        // Cell rects stay finite and ordered
        let r = tiny.cell_rect(2, 3);
        assert!(r.w >= 0.0 && r.h >= 0.0);
    }

    #[test]
    fn test_footer_rect() {
        let grid = GridLayout::compute(1024.0, 768.0, 4, 3, 20.0, 100.0);
        let footer = grid.footer_rect();
        assert_eq!(footer.y, 668.0);
        assert_eq!(footer.h, 100.0);
        assert_eq!(footer.w, 1024.0);
    }
}
