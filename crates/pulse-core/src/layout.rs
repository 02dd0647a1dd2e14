// File: crates/pulse-core/src/layout.rs
// Summary: Row-major grid of equally sized chart cells.

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { rows: 4, cols: 5 }
    }
}

impl GridLayout {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows: rows.max(1), cols: cols.max(1) }
    }

    pub fn capacity(&self) -> usize {
        (self.rows as usize).saturating_mul(self.cols as usize)
    }

    /// Size of one cell, rounded down to whole pixels.
    pub fn cell_size(&self, width: u32, height: u32) -> (u32, u32) {
        (width / self.cols, height / self.rows)
    }

    /// Cell of chart `i`, filled row by row; `None` past the last cell.
    pub fn cell(&self, i: usize, width: u32, height: u32) -> Option<Rect> {
        if i >= self.capacity() {
            return None;
        }
        let (w, h) = self.cell_size(width, height);
        let cols = self.cols as usize;
        let (col, row) = (i % cols, i / cols);
        Some(Rect::from_ltwh(col as f32 * w as f32, row as f32 * h as f32, w as f32, h as f32))
    }
}
