//! Terminal module: A crossterm-backed window host.
//!
//! The panel surface is the alternate screen. Each character cell shows two
//! vertically stacked pixels using the upper half block `▀` with true-color
//! foreground (top) and background (bottom). A `scale` factor lets one
//! displayed pixel stand for a `scale`×`scale` block of panel pixels, so a
//! scene laid out for a large window still fits a terminal.

mod host;
mod output;

pub use host::TerminalHost;
pub use output::OutputBuffer;

use crate::layout::{Rect, Size};

/// Mapping between terminal cells and panel pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMapping {
    scale: u32,
}

impl CellMapping {
    /// Create a mapping; a zero scale is treated as one.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    /// Panel pixels per displayed pixel.
    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Panel size for a terminal of `cols`×`rows` cells.
    pub fn panel_size(&self, cols: u16, rows: u16) -> Size {
        Size::new(
            u32::from(cols).saturating_mul(self.scale),
            u32::from(rows).saturating_mul(2 * self.scale),
        )
    }

    /// Panel coordinates at the centre of a cell.
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        let scale = f64::from(self.scale);
        (
            (f64::from(col) + 0.5) * scale,
            (f64::from(row) + 0.5) * 2.0 * scale,
        )
    }

    /// Panel pixel sampled for the displayed pixel at (`col`, `pixel_row`).
    #[inline]
    pub const fn sample(&self, col: u32, pixel_row: u32) -> (u32, u32) {
        (col.saturating_mul(self.scale), pixel_row.saturating_mul(self.scale))
    }

    /// Cells (as a column/row rectangle) that show any pixel of `area`.
    pub fn cells_covering(&self, area: Rect) -> Rect {
        let cell_h = 2 * self.scale;
        let x = area.x / self.scale;
        let y = area.y / cell_h;
        let right = area.right().div_ceil(self.scale);
        let bottom = area.bottom().div_ceil(cell_h);
        Rect::new(x, y, right - x, bottom - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_size() {
        let mapping = CellMapping::new(4);
        assert_eq!(mapping.panel_size(200, 100), Size::new(800, 800));
    }

    #[test]
    fn test_cell_center_round_trips_to_cell() {
        let mapping = CellMapping::new(4);
        let (x, y) = mapping.cell_center(37, 18);
        assert_eq!(x, 150.0);
        assert_eq!(y, 148.0);
        let cells = mapping.cells_covering(Rect::new(150, 148, 1, 1));
        assert_eq!((cells.x, cells.y), (37, 18));
    }

    #[test]
    fn test_cells_covering_full_panel() {
        let mapping = CellMapping::new(2);
        let cells = mapping.cells_covering(Rect::new(0, 0, 31, 30));
        assert_eq!(cells, Rect::new(0, 0, 16, 8));
    }

    #[test]
    fn test_zero_scale() {
        assert_eq!(CellMapping::new(0).scale(), 1);
    }
}
