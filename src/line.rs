//! Line plot assembler
//!
//! Renders a dataset as a styled multi-series line chart, optionally
//! routing named columns to a secondary Y axis on the right.

use crate::compose::append_traces;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::figure::{factory, time_axis, Figure, PanelGrid, FONT_FAMILY};
use crate::palette::default_colour_scale;
use plotly::common::{Anchor, AxisSide, Font, Orientation};
use plotly::layout::Legend;

/// Columns routed to the secondary Y axis: one name or a sequence
#[derive(Debug, Clone)]
pub enum SecondaryY {
    Column(String),
    Columns(Vec<String>),
}

impl SecondaryY {
    fn contains(&self, name: &str) -> bool {
        match self {
            SecondaryY::Column(c) => c == name,
            SecondaryY::Columns(cs) => cs.iter().any(|c| c == name),
        }
    }
}

impl From<&str> for SecondaryY {
    fn from(name: &str) -> Self {
        SecondaryY::Column(name.to_string())
    }
}

impl From<String> for SecondaryY {
    fn from(name: String) -> Self {
        SecondaryY::Column(name)
    }
}

impl From<Vec<String>> for SecondaryY {
    fn from(names: Vec<String>) -> Self {
        SecondaryY::Columns(names)
    }
}

/// Multi-series line chart of the dataset
///
/// One width-2 line per value column against the index column, using the
/// default colour scale. With `secondary_y` set, the listed columns are
/// rebound to an overlay Y axis on the right; the primary Y is then
/// formatted as a percentage and the overlay as a signed integer. Without
/// it, the single Y axis uses integer formatting. All Y ranges are fixed.
pub fn line_plot(data: &Dataset, secondary_y: Option<SecondaryY>) -> Result<Figure> {
    let scale = default_colour_scale();

    let mut figure = Figure::with_grid(PanelGrid::single())?;
    let handles = append_traces(&mut figure, factory::line_series(data, scale)?, 1, 1, None)?;

    figure.update_layout(|layout| {
        layout
            .font(Font::new().family(FONT_FAMILY))
            .legend(
                Legend::new()
                    .orientation(Orientation::Horizontal)
                    .x_anchor(Anchor::Center)
                    .y_anchor(Anchor::Bottom)
                    .x(0.5)
                    .y(-0.2),
            )
    });
    figure.update_x_axis(0, time_axis)?;

    match secondary_y {
        Some(secondary) => {
            let overlay = figure.add_overlay_y_axis(0, AxisSide::Right)?;
            for (handle, column) in handles.iter().zip(data.value_columns()) {
                if secondary.contains(&column) {
                    figure.rebind_y_axis(*handle, overlay)?;
                }
            }
            figure.update_y_axis(0, |axis| {
                axis.fixed_range(true).hover_format(".2%").tick_format(".2%")
            })?;
            figure.update_y_axis(overlay, |axis| axis.fixed_range(true).hover_format("d"))?;
        }
        None => {
            figure.update_y_axis(0, |axis| {
                axis.fixed_range(true).hover_format("d").tick_format("d")
            })?;
        }
    }

    Ok(figure)
}
