//! Trace wrappers and style updates
//!
//! `PanelTrace` is a tagged union over the trace kinds the assemblers
//! compose (line/scatter series and histograms) so traces can be carried,
//! restyled and rebound uniformly before being handed to the charting
//! library. `TraceUpdate` is a shallow style overlay: only the attributes
//! that are set are written onto the trace.

use plotly::common::{Line, Marker};
use plotly::{Histogram, Scatter, Trace};

/// One renderable data series within a figure
#[derive(Debug, Clone)]
pub enum PanelTrace {
    Scatter(Box<Scatter<f64, f64>>),
    Histogram(Box<Histogram<f64>>),
}

impl PanelTrace {
    /// Bind the trace to a subplot's axis pair (e.g. "x3"/"y3")
    pub fn with_axes(self, x_axis: &str, y_axis: &str) -> Self {
        match self {
            PanelTrace::Scatter(s) => PanelTrace::Scatter(s.x_axis(x_axis).y_axis(y_axis)),
            PanelTrace::Histogram(h) => PanelTrace::Histogram(h.x_axis(x_axis).y_axis(y_axis)),
        }
    }

    /// Rebind only the Y axis (used for overlay axes)
    pub fn with_y_axis(self, y_axis: &str) -> Self {
        match self {
            PanelTrace::Scatter(s) => PanelTrace::Scatter(s.y_axis(y_axis)),
            PanelTrace::Histogram(h) => PanelTrace::Histogram(h.y_axis(y_axis)),
        }
    }

    /// Apply a style update. Line attributes are ignored on histograms.
    pub fn apply(self, update: &TraceUpdate) -> Self {
        match self {
            PanelTrace::Scatter(mut s) => {
                if let Some(name) = &update.name {
                    s = s.name(name);
                }
                if let Some(show) = update.show_legend {
                    s = s.show_legend(show);
                }
                if let Some(marker) = update.marker() {
                    s = s.marker(marker);
                }
                if let Some(line) = update.line() {
                    s = s.line(line);
                }
                PanelTrace::Scatter(s)
            }
            PanelTrace::Histogram(mut h) => {
                if let Some(name) = &update.name {
                    h = h.name(name);
                }
                if let Some(show) = update.show_legend {
                    h = h.show_legend(show);
                }
                if let Some(marker) = update.marker() {
                    h = h.marker(marker);
                }
                PanelTrace::Histogram(h)
            }
        }
    }

    /// Hand the trace to the charting library
    pub fn into_trace(self) -> Box<dyn Trace> {
        match self {
            PanelTrace::Scatter(s) => s,
            PanelTrace::Histogram(h) => h,
        }
    }
}

impl From<Box<Scatter<f64, f64>>> for PanelTrace {
    fn from(trace: Box<Scatter<f64, f64>>) -> Self {
        PanelTrace::Scatter(trace)
    }
}

impl From<Box<Histogram<f64>>> for PanelTrace {
    fn from(trace: Box<Histogram<f64>>) -> Self {
        PanelTrace::Histogram(trace)
    }
}

/// Shallow style overlay for a trace; unset fields leave the trace unchanged
#[derive(Debug, Clone, Default)]
pub struct TraceUpdate {
    name: Option<String>,
    show_legend: Option<bool>,
    marker_color: Option<String>,
    marker_opacity: Option<f64>,
    line_color: Option<String>,
    line_width: Option<f64>,
}

impl TraceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    pub fn marker_color(mut self, color: impl Into<String>) -> Self {
        self.marker_color = Some(color.into());
        self
    }

    pub fn marker_opacity(mut self, opacity: f64) -> Self {
        self.marker_opacity = Some(opacity);
        self
    }

    pub fn line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    fn marker(&self) -> Option<Marker> {
        if self.marker_color.is_none() && self.marker_opacity.is_none() {
            return None;
        }
        let mut marker = Marker::new();
        if let Some(color) = &self.marker_color {
            marker = marker.color(color.clone());
        }
        if let Some(opacity) = self.marker_opacity {
            marker = marker.opacity(opacity);
        }
        Some(marker)
    }

    fn line(&self) -> Option<Line> {
        if self.line_color.is_none() && self.line_width.is_none() {
            return None;
        }
        let mut line = Line::new();
        if let Some(color) = &self.line_color {
            line = line.color(color.clone());
        }
        if let Some(width) = self.line_width {
            line = line.width(width);
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn trace_json(trace: PanelTrace) -> Value {
        serde_json::from_str(&trace.into_trace().to_json()).unwrap()
    }

    #[test]
    fn test_apply_name_and_legend() {
        let trace = PanelTrace::from(Scatter::new(vec![1.0, 2.0], vec![3.0, 4.0]));
        let update = TraceUpdate::new().name("Count").show_legend(false);
        let json = trace_json(trace.apply(&update));
        assert_eq!(json["name"], "Count");
        assert_eq!(json["showlegend"], false);
    }

    #[test]
    fn test_apply_marker_style() {
        let trace = PanelTrace::from(Histogram::new(vec![1.0, 2.0, 2.0]));
        let update = TraceUpdate::new().marker_color("black").marker_opacity(0.4);
        let json = trace_json(trace.apply(&update));
        assert_eq!(json["marker"]["color"], "black");
        assert_eq!(json["marker"]["opacity"], 0.4);
    }

    #[test]
    fn test_apply_line_style() {
        let trace = PanelTrace::from(Scatter::new(vec![1.0, 2.0], vec![3.0, 4.0]));
        let update = TraceUpdate::new().line_color("black").line_width(1.5);
        let json = trace_json(trace.apply(&update));
        assert_eq!(json["line"]["color"], "black");
        assert_eq!(json["line"]["width"], 1.5);
    }

    #[test]
    fn test_line_attributes_ignored_on_histograms() {
        let trace = PanelTrace::from(Histogram::new(vec![1.0, 2.0]));
        let update = TraceUpdate::new().line_color("black").line_width(1.5);
        let json = trace_json(trace.apply(&update));
        assert!(json.get("line").is_none() || json["line"].is_null());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let trace = PanelTrace::from(Scatter::new(vec![1.0], vec![2.0]).name("orig"));
        let json = trace_json(trace.apply(&TraceUpdate::new()));
        assert_eq!(json["name"], "orig");
        assert!(json.get("marker").is_none() || json["marker"].is_null());
    }

    #[test]
    fn test_axis_binding() {
        let trace = PanelTrace::from(Scatter::new(vec![1.0], vec![2.0]));
        let json = trace_json(trace.with_axes("x3", "y3").with_y_axis("y6"));
        assert_eq!(json["xaxis"], "x3");
        assert_eq!(json["yaxis"], "y6");
    }
}
