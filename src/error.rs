//! Engine Error Module
//! The failure taxonomy surfaced to calling layers.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by the ranking engine. Each variant is raised at the point
/// of detection and surfaced verbatim; the engine never retries and never
/// degrades to partial results.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unsupported file format: '{0}'")]
    UnsupportedFormat(String),
    #[error("No valid data found in file")]
    NoHeaderFound,
    #[error("Parameter '{0}' not found in numeric columns")]
    ParameterNotFound(String),
    #[error("No label/identifier column found")]
    NoLabelColumn,
    #[error("No records match the given constraints")]
    EmptyResultSet,
    #[error("Sum of weights must be greater than 0")]
    InvalidWeights,
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
