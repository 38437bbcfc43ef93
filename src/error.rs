//! Error types for the anofox-outliers library.

use thiserror::Error;

/// Result type alias for outlier detection operations.
pub type Result<T> = std::result::Result<T, OutlierError>;

/// Errors that can occur during outlier detection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlierError {
    /// Input sample is empty; mean, standard deviation, and percentiles
    /// are all undefined on an empty sample.
    #[error("empty input data")]
    EmptyData,
}
