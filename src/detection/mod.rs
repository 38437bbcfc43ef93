//! Outlier detectors for one-dimensional samples.
//!
//! This module provides two independent methods:
//! - Z-score: standardized distance from the sample mean
//! - IQR: Tukey fences around the interquartile range

mod iqr;
mod zscore;

pub use iqr::{detect_outliers_iqr, IQR_FENCE_MULTIPLIER};
pub use zscore::{detect_outliers_zscore, ZSCORE_THRESHOLD};
