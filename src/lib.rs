//! plotkit
//!
//! Helpers for composing styled, interactive multi-panel Plotly figures
//! from Polars data: a trace composer for merging traces into subplot
//! grids, a metrics annotator for regression-quality text blocks, and two
//! figure assemblers (multi-series line chart, 2-variable scatterplot
//! matrix with best-fit overlays).

pub mod annotate;
pub mod compose;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod line;
pub mod matrix;
pub mod metrics;
pub mod palette;
pub mod stats;

pub use annotate::annotate_metrics;
pub use compose::{append_traces, GridIndex, TraceSource, TraceUpdates};
pub use dataset::Dataset;
pub use error::{ChartError, Result};
pub use figure::{Figure, PanelGrid, PanelSpec, PanelTrace, TraceHandle, TraceUpdate};
pub use line::{line_plot, SecondaryY};
pub use matrix::scatter_plot_matrix;
pub use palette::{default_colour_scale, ColourScale};
