use crate::foundation::core::{Rect, Size};
use crate::foundation::error::{GridlensError, GridlensResult};

/// Fixed `rows x cols` partition of the composited surface.
///
/// The partition itself is immutable for a session; cell rectangles are a
/// pure function of the surface's *current* size and are recomputed at every
/// lookup, never cached: the surface can resize between any two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridIndex {
    rows: u32,
    cols: u32,
}

impl GridIndex {
    /// Create a validated grid with at least one row and one column.
    pub fn new(rows: u32, cols: u32) -> GridlensResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridlensError::validation(
                "grid must have at least one row and one column",
            ));
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Rectangle cell `(row, col)` currently occupies on a surface of
    /// `surface_size`, in surface coordinates.
    ///
    /// Boundaries stay fractional; any snapping to whole pixels happens in
    /// the capture layer. Cells tile the surface exactly: each cell's right
    /// edge is computed as the next cell's left edge, so there is no gap and
    /// no overlap.
    pub fn cell_rect(&self, row: u32, col: u32, surface_size: Size) -> GridlensResult<Rect> {
        if row >= self.rows || col >= self.cols {
            return Err(GridlensError::validation(format!(
                "cell ({row}, {col}) is out of range for a {}x{} grid",
                self.rows, self.cols
            )));
        }

        let cell_width = surface_size.width / f64::from(self.cols);
        let cell_height = surface_size.height / f64::from(self.rows);
        Ok(Rect::new(
            f64::from(col) * cell_width,
            f64::from(row) * cell_height,
            f64::from(col + 1) * cell_width,
            f64::from(row + 1) * cell_height,
        ))
    }

    /// Human-readable 1-based label for a cell, e.g. `"Row 3, Column 6"`.
    pub fn cell_label(&self, row: u32, col: u32) -> String {
        format!("Row {}, Column {}", row + 1, col + 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/index.rs"]
mod tests;
