//! Panel grid arithmetic
//!
//! Maps a rows × cols subplot grid (with optional spanning panels) to
//! paper-relative axis domains. Rows are numbered from 1 at the top and
//! columns from 1 at the left, matching the charting library's subplot
//! convention. Inter-panel spacing follows the usual subplot factory
//! defaults: 0.3/rows vertically, 0.2/cols horizontally.

use crate::error::{ChartError, Result};

/// Placement of one panel within the grid (1-based, spans >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl PanelSpec {
    /// A single-cell panel at (row, col)
    pub fn new(row: usize, col: usize) -> Self {
        PanelSpec {
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    /// Extend the panel over `row_span` rows and `col_span` columns
    pub fn span(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }

    fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.row_span
            && col >= self.col
            && col < self.col + self.col_span
    }
}

/// One panel with its computed axis domains
#[derive(Debug, Clone)]
pub struct Panel {
    pub spec: PanelSpec,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
}

/// A rows × cols subplot grid
#[derive(Debug, Clone)]
pub struct PanelGrid {
    rows: usize,
    cols: usize,
    panels: Vec<Panel>,
}

impl PanelGrid {
    /// A 1×1 grid with a single panel filling the paper
    pub fn single() -> Self {
        // A 1x1 spec cannot be out of bounds
        Self::with_spec(1, 1, &[PanelSpec::new(1, 1)]).expect("1x1 grid")
    }

    /// A grid with one single-cell panel per cell, in row-major order
    pub fn regular(rows: usize, cols: usize) -> Result<Self> {
        let mut specs = Vec::with_capacity(rows * cols);
        for row in 1..=rows {
            for col in 1..=cols {
                specs.push(PanelSpec::new(row, col));
            }
        }
        Self::with_spec(rows, cols, &specs)
    }

    /// A grid with explicit panel placements, allowing spanning panels
    pub fn with_spec(rows: usize, cols: usize, specs: &[PanelSpec]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(ChartError::Grid("grid must have rows and cols".to_string()));
        }

        let v_spacing = 0.3 / rows as f64;
        let h_spacing = 0.2 / cols as f64;
        let cell_h = (1.0 - v_spacing * (rows - 1) as f64) / rows as f64;
        let cell_w = (1.0 - h_spacing * (cols - 1) as f64) / cols as f64;

        let mut panels = Vec::with_capacity(specs.len());
        for spec in specs {
            if spec.row == 0 || spec.col == 0 || spec.row_span == 0 || spec.col_span == 0 {
                return Err(ChartError::Grid(format!(
                    "panel placement is 1-based with spans >= 1: {spec:?}"
                )));
            }
            if spec.row + spec.row_span - 1 > rows || spec.col + spec.col_span - 1 > cols {
                return Err(ChartError::Grid(format!(
                    "panel {spec:?} exceeds a {rows}x{cols} grid"
                )));
            }

            let x0 = (spec.col - 1) as f64 * (cell_w + h_spacing);
            let x1 = x0 + spec.col_span as f64 * cell_w + (spec.col_span - 1) as f64 * h_spacing;
            let y_top = 1.0 - (spec.row - 1) as f64 * (cell_h + v_spacing);
            let y_bottom =
                y_top - spec.row_span as f64 * cell_h - (spec.row_span - 1) as f64 * v_spacing;

            panels.push(Panel {
                spec: *spec,
                x_domain: [x0.max(0.0), x1.min(1.0)],
                y_domain: [y_bottom.max(0.0), y_top.min(1.0)],
            });
        }

        Ok(PanelGrid { rows, cols, panels })
    }

    /// Grid dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All panels in declaration order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Index of the panel covering (row, col), if any
    ///
    /// Cells inside a spanning panel resolve to that panel.
    pub fn panel_at(&self, row: usize, col: usize) -> Option<usize> {
        self.panels.iter().position(|p| p.spec.covers(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_panel_fills_paper() {
        let grid = PanelGrid::single();
        let panel = &grid.panels()[0];
        assert_eq!(panel.x_domain, [0.0, 1.0]);
        assert_eq!(panel.y_domain, [0.0, 1.0]);
        assert_eq!(grid.panel_at(1, 1), Some(0));
    }

    #[test]
    fn test_regular_grid_row_major() {
        let grid = PanelGrid::regular(2, 2).unwrap();
        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid.panels().len(), 4);
        assert_eq!(grid.panel_at(1, 1), Some(0));
        assert_eq!(grid.panel_at(1, 2), Some(1));
        assert_eq!(grid.panel_at(2, 1), Some(2));
        assert_eq!(grid.panel_at(2, 2), Some(3));
        assert_eq!(grid.panel_at(3, 1), None);
    }

    #[test]
    fn test_spanning_panel_domains() {
        // Layout used by the scatterplot matrix: a panel over rows 1-2 and
        // both columns, then four single cells in rows 3 and 4.
        let grid = PanelGrid::with_spec(
            4,
            2,
            &[
                PanelSpec::new(1, 1).span(2, 2),
                PanelSpec::new(3, 1),
                PanelSpec::new(3, 2),
                PanelSpec::new(4, 1),
                PanelSpec::new(4, 2),
            ],
        )
        .unwrap();

        let top = &grid.panels()[0];
        assert_eq!(top.x_domain, [0.0, 1.0]);
        assert!((top.y_domain[1] - 1.0).abs() < 1e-12);
        // Spans two cell heights plus the spacing between them
        let expected_bottom = 1.0 - 2.0 * top_cell_height() - 0.075;
        assert!((top.y_domain[0] - expected_bottom).abs() < 1e-12);

        let bottom_left = &grid.panels()[3];
        assert!((bottom_left.y_domain[0]).abs() < 1e-12);

        // Spanned cells resolve to the spanning panel
        assert_eq!(grid.panel_at(1, 1), Some(0));
        assert_eq!(grid.panel_at(2, 2), Some(0));
        assert_eq!(grid.panel_at(3, 2), Some(2));
        assert_eq!(grid.panel_at(4, 1), Some(3));
    }

    fn top_cell_height() -> f64 {
        // 4 rows, vertical spacing 0.3/4 = 0.075
        (1.0 - 0.075 * 3.0) / 4.0
    }

    #[test]
    fn test_out_of_bounds_spec() {
        assert!(PanelGrid::with_spec(2, 2, &[PanelSpec::new(3, 1)]).is_err());
        assert!(PanelGrid::with_spec(2, 2, &[PanelSpec::new(1, 1).span(3, 1)]).is_err());
        assert!(PanelGrid::with_spec(2, 2, &[PanelSpec::new(0, 1)]).is_err());
    }
}
