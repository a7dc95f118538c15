//! Trace composition
//!
//! Merges traces into an existing multi-panel figure at specified grid
//! positions, optionally applying per-trace style overlays first. The
//! accepted input shapes (a whole figure, a bare trace, an explicit
//! sequence) are expressed as tagged unions and normalized to aligned
//! (trace, update, row, col) tuples before insertion.

use crate::error::Result;
use crate::figure::{Figure, PanelTrace, TraceHandle, TraceUpdate};

/// Where appended traces come from
#[derive(Debug, Clone)]
pub enum TraceSource {
    /// Another figure; its traces are extracted in insertion order
    Figure(Figure),
    /// A single bare trace
    Single(PanelTrace),
    /// An explicit trace sequence
    Traces(Vec<PanelTrace>),
}

impl From<Figure> for TraceSource {
    fn from(figure: Figure) -> Self {
        TraceSource::Figure(figure)
    }
}

impl From<PanelTrace> for TraceSource {
    fn from(trace: PanelTrace) -> Self {
        TraceSource::Single(trace)
    }
}

impl From<Vec<PanelTrace>> for TraceSource {
    fn from(traces: Vec<PanelTrace>) -> Self {
        TraceSource::Traces(traces)
    }
}

/// A grid coordinate per trace: one value broadcast to all, or one each
#[derive(Debug, Clone)]
pub enum GridIndex {
    Scalar(usize),
    Each(Vec<usize>),
}

impl GridIndex {
    fn broadcast(self, count: usize) -> Vec<usize> {
        match self {
            GridIndex::Scalar(value) => vec![value; count],
            GridIndex::Each(values) => values,
        }
    }
}

impl From<usize> for GridIndex {
    fn from(value: usize) -> Self {
        GridIndex::Scalar(value)
    }
}

impl From<Vec<usize>> for GridIndex {
    fn from(values: Vec<usize>) -> Self {
        GridIndex::Each(values)
    }
}

/// Style overlays for appended traces: one shared, or one per trace
#[derive(Debug, Clone)]
pub enum TraceUpdates {
    Shared(TraceUpdate),
    Each(Vec<TraceUpdate>),
}

impl From<TraceUpdate> for TraceUpdates {
    fn from(update: TraceUpdate) -> Self {
        TraceUpdates::Shared(update)
    }
}

impl From<Vec<TraceUpdate>> for TraceUpdates {
    fn from(updates: Vec<TraceUpdate>) -> Self {
        TraceUpdates::Each(updates)
    }
}

/// Append traces to `figure` at the given (row, col) panels, in order
///
/// Scalar `rows`/`cols` broadcast to the trace count; a shared update
/// broadcasts likewise. Returns a handle per inserted trace so callers can
/// restyle or rebind them later without re-deriving list positions.
///
/// Known looseness, kept from the original helper: when explicit sequences
/// disagree in length after broadcast, pairing stops at the shortest
/// sequence and the remainder is silently dropped.
pub fn append_traces(
    figure: &mut Figure,
    source: impl Into<TraceSource>,
    rows: impl Into<GridIndex>,
    cols: impl Into<GridIndex>,
    updates: Option<TraceUpdates>,
) -> Result<Vec<TraceHandle>> {
    let traces: Vec<PanelTrace> = match source.into() {
        TraceSource::Figure(f) => f.into_traces(),
        TraceSource::Single(t) => vec![t],
        TraceSource::Traces(v) => v,
    };
    let count = traces.len();

    let rows = rows.into().broadcast(count);
    let cols = cols.into().broadcast(count);
    let updates: Vec<Option<TraceUpdate>> = match updates {
        None => vec![None; count],
        Some(TraceUpdates::Shared(u)) => vec![Some(u); count],
        Some(TraceUpdates::Each(v)) => v.into_iter().map(Some).collect(),
    };

    let mut handles = Vec::with_capacity(count);
    for (((trace, update), row), col) in traces.into_iter().zip(updates).zip(rows).zip(cols) {
        let trace = match update {
            Some(update) => trace.apply(&update),
            None => trace,
        };
        handles.push(figure.append_trace(trace, row, col)?);
    }
    Ok(handles)
}
