use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while composing figures
#[derive(Debug, Error)]
pub enum ChartError {
    /// Input sequences have different lengths
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Input sequences are empty or too short for the computation
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// A fit cannot be computed (e.g. constant x values)
    #[error("degenerate fit: {0}")]
    DegenerateFit(String),

    /// Column name not present in the dataset
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// Panel grid addressing error
    #[error("grid error: {0}")]
    Grid(String),

    /// Plotly layouts carry a bounded number of axes per direction
    #[error("no free axis slot (at most {0} axes per direction)")]
    AxisSlots(usize),

    /// Trace handle does not resolve to a trace
    #[error("no trace at index {0}")]
    UnknownTrace(usize),

    /// Underlying dataframe error
    #[error("dataframe error: {0}")]
    DataFrame(#[from] PolarsError),
}

/// Type alias for Results using ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
