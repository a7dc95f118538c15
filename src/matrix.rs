//! Scatterplot-matrix assembler
//!
//! Builds the combined view for a 2-column dataset: a time-series panel
//! spanning the top half, a 2×2 scatterplot matrix below it, and
//! ordinary-least-squares best-fit overlays on the cross-scatter panels.
//!
//! Trace insertion order is a styling invariant: 0/1 top-panel series,
//! 2 histogram of column 0, 3 cross-scatter at (3,2), 4 cross-scatter at
//! (4,1), 5 histogram of column 1, then the two fit lines. Handles returned
//! at insertion time are used for the restyling, so the order is asserted
//! rather than re-derived.

use crate::compose::append_traces;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::figure::{
    factory, time_axis, Figure, PanelGrid, PanelSpec, PanelTrace, TraceUpdate, FONT_FAMILY,
};
use crate::palette::{default_colour_scale, ColourScale};
use crate::stats::linregress;
use plotly::common::{AxisSide, Font, Marker, Title};
use plotly::Scatter;

/// Overall figure height in pixels
const FIGURE_HEIGHT: usize = 800;

/// Cross-scatter marker opacity
const SCATTER_OPACITY: f64 = 0.4;

/// Combined time-series and scatterplot-matrix figure for 2 columns
///
/// Panics if the dataset does not have exactly 2 value columns. When
/// `colours` is `None` the default colour scale is used (see
/// [`crate::palette::DEFAULT_COLOUR_SCALE`]). `y1_title`/`y2_title` label
/// the axes carrying the first and second column respectively.
pub fn scatter_plot_matrix(
    data: &Dataset,
    colours: Option<&ColourScale>,
    y1_title: &str,
    y2_title: &str,
) -> Result<Figure> {
    assert_eq!(
        data.n_value_columns(),
        2,
        "scatter_plot_matrix requires exactly 2 value columns"
    );

    let scale = colours.unwrap_or_else(|| default_colour_scale());
    let columns = data.value_columns();

    // Top panel spans rows 1-2 and both columns; matrix cells fill rows 3-4.
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
    )?;
    let mut figure = Figure::with_grid(grid)?;

    let line_handles = append_traces(
        &mut figure,
        factory::line_series(data, scale)?,
        1,
        1,
        Some(TraceUpdate::new().show_legend(false).into()),
    )?;
    let matrix_handles = append_traces(
        &mut figure,
        factory::scatter_matrix(data)?,
        vec![3, 3, 4, 4],
        vec![1, 2, 1, 2],
        None,
    )?;

    // Best-fit lines, one per direction, on a null-free copy of the data
    let clean = data.drop_nulls()?;
    let first = clean.column_values(&columns[0])?;
    let second = clean.column_values(&columns[1])?;
    figure.append_trace(best_fit_trace(&second, &first, scale)?, 3, 2)?;
    figure.append_trace(best_fit_trace(&first, &second, scale)?, 4, 1)?;

    // Second Y scale for the top panel, shared X axis
    let overlay = figure.add_overlay_y_axis(0, AxisSide::Right)?;
    figure.rebind_y_axis(line_handles[1], overlay)?;

    figure.update_layout(|layout| layout.font(Font::new().family(FONT_FAMILY)));
    figure.update_x_axis(0, time_axis)?;
    figure.update_x_axis(1, |axis| {
        axis.fixed_range(true).hover_format(".2%").tick_format(".2%")
    })?;
    figure.update_x_axis(2, |axis| axis.fixed_range(true))?;
    figure.update_x_axis(3, |axis| {
        axis.fixed_range(true)
            .hover_format(".2%")
            .tick_format(".2%")
            .title(Title::with_text(y1_title))
    })?;
    figure.update_x_axis(4, |axis| {
        axis.fixed_range(true).title(Title::with_text(y2_title))
    })?;
    figure.update_y_axis(0, |axis| {
        axis.fixed_range(true)
            .hover_format(".2%")
            .tick_format(".2%")
            .title(Title::with_text(y1_title))
    })?;
    figure.update_y_axis(1, |axis| {
        axis.fixed_range(true).title(Title::with_text(y1_title))
    })?;
    figure.update_y_axis(2, |axis| {
        axis.fixed_range(true).hover_format(".2%").tick_format(".2%")
    })?;
    figure.update_y_axis(3, |axis| {
        axis.fixed_range(true).title(Title::with_text(y2_title))
    })?;
    figure.update_y_axis(4, |axis| axis.fixed_range(true))?;
    figure.update_y_axis(overlay, |axis| {
        axis.fixed_range(true)
            .hover_format("d")
            .title(Title::with_text(y2_title))
    })?;

    // Match histogram colours to their series; label matrix traces for hover
    figure.update_trace(
        matrix_handles[0],
        &TraceUpdate::new()
            .name("Count")
            .marker_color(scale.colour(0)),
    )?;
    figure.update_trace(
        matrix_handles[1],
        &TraceUpdate::new()
            .name(columns[0].as_str())
            .marker_color("black")
            .marker_opacity(SCATTER_OPACITY),
    )?;
    figure.update_trace(
        matrix_handles[2],
        &TraceUpdate::new()
            .name(columns[1].as_str())
            .marker_color("black")
            .marker_opacity(SCATTER_OPACITY),
    )?;
    figure.update_trace(
        matrix_handles[3],
        &TraceUpdate::new()
            .name("Count")
            .marker_color(scale.colour(1)),
    )?;

    figure.set_height(FIGURE_HEIGHT);

    Ok(figure)
}

/// Best-fit line of y on x with slope/intercept/correlation hover text
fn best_fit_trace(x: &[f64], y: &[f64], scale: &ColourScale) -> Result<PanelTrace> {
    let fit = linregress(x, y)?;
    let fitted: Vec<f64> = x.iter().map(|&xi| fit.predict(xi)).collect();
    let hover = format!(
        "y = {:.2E} x + {:.2E}<br>r<sup>2</sup> = {:.2}",
        fit.slope, fit.intercept, fit.r
    );
    let trace = Scatter::new(x.to_vec(), fitted)
        .show_legend(false)
        .name("Best fit")
        .marker(Marker::new().color(scale.colour(2).to_string()))
        .text(&hover);
    Ok(PanelTrace::from(trace))
}
