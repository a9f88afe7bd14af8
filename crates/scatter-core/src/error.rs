// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for surface validation and data parsing.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    /// Surface dimensions are unusable or leave no plot area inside the margins.
    #[error("invalid surface: {width}x{height} leaves no drawable plot area")]
    InvalidSurface { width: f64, height: f64 },

    /// An observation's x value could not be parsed as a timestamp.
    #[error("observation {index} has unparseable timestamp {value:?}")]
    InvalidTimestamp { index: usize, value: String },

    /// The observation sequence was empty; a time domain cannot be derived.
    #[error("no observations to plot")]
    EmptyData,
}

pub type ChartResult<T> = Result<T, ChartError>;
