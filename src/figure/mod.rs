//! Figure model
//!
//! An ordered collection of traces arranged on a panel grid, plus the
//! layout configuration that styles it. The charting library identifies
//! subplot axes by name ("x", "x2", ...), so the figure keeps one axis
//! slot per panel and assembles the final `plotly::Layout` on demand.
//!
//! Structure:
//! - `grid.rs`: panel grid and axis-domain arithmetic
//! - `trace.rs`: trace wrappers and shallow style updates
//! - `factory.rs`: trace generators (line series, scatterplot matrix)

pub mod factory;
pub mod grid;
pub mod trace;

pub use grid::{Panel, PanelGrid, PanelSpec};
pub use trace::{PanelTrace, TraceUpdate};

use crate::error::{ChartError, Result};
use plotly::common::AxisSide;
use plotly::layout::{Annotation, Axis, TicksDirection};
use plotly::{Layout, Plot};

/// Font family applied by the assemblers
pub(crate) const FONT_FAMILY: &str = "Open Sans";

/// The charting library names axes "x".."x8"; more slots do not exist
const MAX_AXES: usize = 8;

/// Stable identifier of a trace within a figure, valid from insertion on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceHandle(pub(crate) usize);

/// A multi-panel chart: traces, per-panel axes and layout configuration
#[derive(Debug, Clone)]
pub struct Figure {
    grid: PanelGrid,
    traces: Vec<PanelTrace>,
    x_axes: Vec<Axis>,
    y_axes: Vec<Axis>,
    annotations: Vec<Annotation>,
    layout: Layout,
}

impl Figure {
    /// Create an empty figure over a panel grid
    ///
    /// One axis pair is allocated per panel, in panel declaration order,
    /// with domains and anchors already set.
    pub fn with_grid(grid: PanelGrid) -> Result<Self> {
        if grid.panels().len() > MAX_AXES {
            return Err(ChartError::AxisSlots(MAX_AXES));
        }

        let mut x_axes = Vec::with_capacity(grid.panels().len());
        let mut y_axes = Vec::with_capacity(grid.panels().len());
        for (i, panel) in grid.panels().iter().enumerate() {
            x_axes.push(
                Axis::new()
                    .domain(&panel.x_domain)
                    .anchor(&axis_name("y", i)),
            );
            y_axes.push(
                Axis::new()
                    .domain(&panel.y_domain)
                    .anchor(&axis_name("x", i)),
            );
        }

        Ok(Figure {
            grid,
            traces: Vec::new(),
            x_axes,
            y_axes,
            annotations: Vec::new(),
            layout: Layout::new(),
        })
    }

    /// Append a trace to the panel covering (row, col); 1-based cell address
    pub fn append_trace(&mut self, trace: PanelTrace, row: usize, col: usize) -> Result<TraceHandle> {
        let panel = self.grid.panel_at(row, col).ok_or_else(|| {
            ChartError::Grid(format!("no panel covers cell ({row}, {col})"))
        })?;
        let trace = trace.with_axes(&axis_name("x", panel), &axis_name("y", panel));
        self.traces.push(trace);
        Ok(TraceHandle(self.traces.len() - 1))
    }

    /// Apply a style update to an inserted trace
    pub fn update_trace(&mut self, handle: TraceHandle, update: &TraceUpdate) -> Result<()> {
        if handle.0 >= self.traces.len() {
            return Err(ChartError::UnknownTrace(handle.0));
        }
        let trace = self.traces.remove(handle.0);
        self.traces.insert(handle.0, trace.apply(update));
        Ok(())
    }

    /// Add a Y axis overlaying an existing one, returning its axis index
    pub fn add_overlay_y_axis(&mut self, over: usize, side: AxisSide) -> Result<usize> {
        if over >= self.y_axes.len() {
            return Err(ChartError::Grid(format!("no y axis at index {over}")));
        }
        if self.y_axes.len() >= MAX_AXES {
            return Err(ChartError::AxisSlots(MAX_AXES));
        }
        self.y_axes
            .push(Axis::new().overlaying(&axis_name("y", over)).side(side));
        Ok(self.y_axes.len() - 1)
    }

    /// Rebind a trace to another Y axis (typically an overlay)
    pub fn rebind_y_axis(&mut self, handle: TraceHandle, axis: usize) -> Result<()> {
        if handle.0 >= self.traces.len() {
            return Err(ChartError::UnknownTrace(handle.0));
        }
        if axis >= self.y_axes.len() {
            return Err(ChartError::Grid(format!("no y axis at index {axis}")));
        }
        let trace = self.traces.remove(handle.0);
        self.traces
            .insert(handle.0, trace.with_y_axis(&axis_name("y", axis)));
        Ok(())
    }

    /// Merge settings into an X axis slot (0-based panel order)
    pub fn update_x_axis(&mut self, index: usize, f: impl FnOnce(Axis) -> Axis) -> Result<()> {
        let slot = self
            .x_axes
            .get_mut(index)
            .ok_or_else(|| ChartError::Grid(format!("no x axis at index {index}")))?;
        *slot = f(std::mem::replace(slot, Axis::new()));
        Ok(())
    }

    /// Merge settings into a Y axis slot (0-based panel order)
    pub fn update_y_axis(&mut self, index: usize, f: impl FnOnce(Axis) -> Axis) -> Result<()> {
        let slot = self
            .y_axes
            .get_mut(index)
            .ok_or_else(|| ChartError::Grid(format!("no y axis at index {index}")))?;
        *slot = f(std::mem::replace(slot, Axis::new()));
        Ok(())
    }

    /// Merge settings into the non-axis layout (font, legend, title, ...)
    pub fn update_layout(&mut self, f: impl FnOnce(Layout) -> Layout) {
        let layout = std::mem::replace(&mut self.layout, Layout::new());
        self.layout = f(layout);
    }

    /// Fix the overall figure height in pixels
    pub fn set_height(&mut self, height: usize) {
        self.update_layout(|l| l.height(height));
    }

    /// Attach paper-anchored annotations to the layout
    pub fn add_annotations(&mut self, annotations: Vec<Annotation>) {
        self.annotations.extend(annotations);
    }

    /// Number of traces inserted so far
    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    /// Number of X axis slots
    pub fn x_axis_count(&self) -> usize {
        self.x_axes.len()
    }

    /// Number of Y axis slots (including overlays)
    pub fn y_axis_count(&self) -> usize {
        self.y_axes.len()
    }

    /// The panel grid this figure was built over
    pub fn grid(&self) -> &PanelGrid {
        &self.grid
    }

    /// Consume the figure, yielding its traces in insertion order
    pub fn into_traces(self) -> Vec<PanelTrace> {
        self.traces
    }

    /// Assemble the final plot for rendering or serialization
    pub fn to_plot(&self) -> Plot {
        let mut layout = self.layout.clone();
        for (i, axis) in self.x_axes.iter().enumerate() {
            layout = set_x_axis(layout, i, axis.clone());
        }
        for (i, axis) in self.y_axes.iter().enumerate() {
            layout = set_y_axis(layout, i, axis.clone());
        }
        if !self.annotations.is_empty() {
            layout = layout.annotations(self.annotations.clone());
        }

        let mut plot = Plot::new();
        for trace in &self.traces {
            plot.add_trace(trace.clone().into_trace());
        }
        plot.set_layout(layout);
        plot
    }
}

/// Subplot axis name for a slot index: "x", "x2", ... / "y", "y2", ...
pub(crate) fn axis_name(prefix: &str, index: usize) -> String {
    if index == 0 {
        prefix.to_string()
    } else {
        format!("{}{}", prefix, index + 1)
    }
}

/// Year-hover time axis used by both assemblers on the top-level X axis
pub(crate) fn time_axis(axis: Axis) -> Axis {
    axis.hover_format("%Y")
        .show_grid(false)
        .show_line(true)
        .ticks(TicksDirection::Outside)
}

fn set_x_axis(layout: Layout, index: usize, axis: Axis) -> Layout {
    match index {
        0 => layout.x_axis(axis),
        1 => layout.x_axis2(axis),
        2 => layout.x_axis3(axis),
        3 => layout.x_axis4(axis),
        4 => layout.x_axis5(axis),
        5 => layout.x_axis6(axis),
        6 => layout.x_axis7(axis),
        7 => layout.x_axis8(axis),
        // Figure construction caps axis slots at MAX_AXES
        _ => unreachable!("axis slot {index} out of range"),
    }
}

fn set_y_axis(layout: Layout, index: usize, axis: Axis) -> Layout {
    match index {
        0 => layout.y_axis(axis),
        1 => layout.y_axis2(axis),
        2 => layout.y_axis3(axis),
        3 => layout.y_axis4(axis),
        4 => layout.y_axis5(axis),
        5 => layout.y_axis6(axis),
        6 => layout.y_axis7(axis),
        7 => layout.y_axis8(axis),
        _ => unreachable!("axis slot {index} out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotly::Scatter;
    use serde_json::Value;

    fn scatter() -> PanelTrace {
        PanelTrace::from(Scatter::new(vec![1.0, 2.0], vec![3.0, 4.0]))
    }

    fn plot_json(figure: &Figure) -> Value {
        serde_json::from_str(&figure.to_plot().to_json()).unwrap()
    }

    #[test]
    fn test_axis_name() {
        assert_eq!(axis_name("x", 0), "x");
        assert_eq!(axis_name("y", 1), "y2");
        assert_eq!(axis_name("y", 5), "y6");
    }

    #[test]
    fn test_append_binds_panel_axes() {
        let grid = PanelGrid::regular(2, 2).unwrap();
        let mut figure = Figure::with_grid(grid).unwrap();
        assert_eq!(figure.x_axis_count(), 4);
        assert_eq!(figure.grid().shape(), (2, 2));
        figure.append_trace(scatter(), 2, 1).unwrap();

        let json = plot_json(&figure);
        assert_eq!(json["data"][0]["xaxis"], "x3");
        assert_eq!(json["data"][0]["yaxis"], "y3");
    }

    #[test]
    fn test_append_outside_grid_fails() {
        let mut figure = Figure::with_grid(PanelGrid::single()).unwrap();
        assert!(figure.append_trace(scatter(), 2, 1).is_err());
    }

    #[test]
    fn test_overlay_axis_and_rebind() {
        let mut figure = Figure::with_grid(PanelGrid::single()).unwrap();
        let handle = figure.append_trace(scatter(), 1, 1).unwrap();
        let overlay = figure.add_overlay_y_axis(0, AxisSide::Right).unwrap();
        assert_eq!(overlay, 1);
        figure.rebind_y_axis(handle, overlay).unwrap();

        let json = plot_json(&figure);
        assert_eq!(json["data"][0]["yaxis"], "y2");
        assert_eq!(json["layout"]["yaxis2"]["overlaying"], "y");
        assert_eq!(json["layout"]["yaxis2"]["side"], "right");
    }

    #[test]
    fn test_update_trace_by_handle() {
        let mut figure = Figure::with_grid(PanelGrid::single()).unwrap();
        let handle = figure.append_trace(scatter(), 1, 1).unwrap();
        figure
            .update_trace(handle, &TraceUpdate::new().name("renamed"))
            .unwrap();

        let json = plot_json(&figure);
        assert_eq!(json["data"][0]["name"], "renamed");
    }

    #[test]
    fn test_height_and_annotations_reach_layout() {
        let mut figure = Figure::with_grid(PanelGrid::single()).unwrap();
        figure.set_height(800);
        figure.add_annotations(vec![Annotation::new().text("note").show_arrow(false)]);

        let json = plot_json(&figure);
        assert_eq!(json["layout"]["height"], 800);
        assert_eq!(json["layout"]["annotations"][0]["text"], "note");
    }

    #[test]
    fn test_axis_slot_cap() {
        let grid = PanelGrid::regular(3, 3).unwrap();
        assert!(matches!(
            Figure::with_grid(grid),
            Err(ChartError::AxisSlots(_))
        ));
    }
}
