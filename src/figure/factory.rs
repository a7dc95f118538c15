//! Trace generators
//!
//! Produce single-panel figures from a dataset, ready to be merged into a
//! target figure with `append_traces`. `line_series` is the per-column
//! line-chart generator; `scatter_matrix` is the 2-variable
//! scatterplot-matrix generator (histogram diagonal, cross-scatter
//! off-diagonal).

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::figure::{Figure, PanelGrid, PanelTrace};
use crate::palette::ColourScale;
use plotly::common::{Line, Mode};
use plotly::{Histogram, Scatter};

/// Line width used by the assemblers
const LINE_WIDTH: f64 = 2.0;

/// One line trace per value column, coloured by scale index
///
/// Traces are named after their columns and plotted against the dataset's
/// index column. Rows where a value is null are skipped per column.
pub fn line_series(data: &Dataset, scale: &ColourScale) -> Result<Figure> {
    let mut figure = Figure::with_grid(PanelGrid::single())?;

    for (i, column) in data.value_columns().iter().enumerate() {
        let (xs, ys) = data.column_points(column)?;
        let trace = Scatter::new(xs, ys)
            .mode(Mode::Lines)
            .name(column)
            .line(Line::new().width(LINE_WIDTH).color(scale.colour(i).to_string()));
        figure.append_trace(PanelTrace::from(trace), 1, 1)?;
    }

    Ok(figure)
}

/// Scatterplot matrix of a 2-column dataset, in row-major cell order
///
/// Trace order: histogram of column 0, cross-scatter of column 0 against
/// column 1, cross-scatter of column 1 against column 0, histogram of
/// column 1. The caller places them on its own grid.
pub fn scatter_matrix(data: &Dataset) -> Result<Figure> {
    let columns = data.value_columns();
    if columns.len() != 2 {
        return Err(ChartError::InsufficientData(format!(
            "scatter matrix needs exactly 2 value columns, got {}",
            columns.len()
        )));
    }
    let mut figure = Figure::with_grid(PanelGrid::single())?;

    let paired = data.drop_nulls()?;
    let first = paired.column_values(&columns[0])?;
    let second = paired.column_values(&columns[1])?;

    figure.append_trace(
        PanelTrace::from(Histogram::new(data.column_values(&columns[0])?)),
        1,
        1,
    )?;
    figure.append_trace(
        PanelTrace::from(Scatter::new(second.clone(), first.clone()).mode(Mode::Markers)),
        1,
        1,
    )?;
    figure.append_trace(
        PanelTrace::from(Scatter::new(first, second).mode(Mode::Markers)),
        1,
        1,
    )?;
    figure.append_trace(
        PanelTrace::from(Histogram::new(data.column_values(&columns[1])?)),
        1,
        1,
    )?;

    Ok(figure)
}
