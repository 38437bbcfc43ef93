//! IQR (interquartile range) outlier detection.
//!
//! Flags values falling outside the Tukey fence derived from the 25th and
//! 75th percentiles of the sorted sample.

use crate::error::{OutlierError, Result};
use crate::stats::quantile_sorted;

/// Fence multiplier applied to the interquartile range.
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;

/// Detect outliers via the IQR fence.
///
/// Sorts a copy of the series, computes Q1 and Q3 with linear-interpolation
/// percentile estimation, and returns every value `v` with
/// `v < Q1 - 1.5*IQR` or `v > Q3 + 1.5*IQR`. Values exactly on either
/// fence are not flagged.
///
/// The result follows the *sorted* order of the sample, not the original
/// input order. The caller's slice is left untouched.
///
/// Samples of size 1-3 are accepted; the percentile estimate degenerates
/// gracefully (the fences may collapse to a single point, in which case
/// any differing value is flagged).
///
/// # Errors
/// Returns [`OutlierError::EmptyData`] if `series` is empty.
///
/// # Example
/// ```
/// use anofox_outliers::detection::detect_outliers_iqr;
///
/// let data = [10.0, 12.0, 12.0, 13.0, 12.0, 11.0, 14.0, 13.0, 15.0, 10.0, 100.0];
/// let outliers = detect_outliers_iqr(&data).unwrap();
/// assert_eq!(outliers, vec![100.0]);
/// ```
pub fn detect_outliers_iqr(series: &[f64]) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(OutlierError::EmptyData);
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;

    let lower_bound = q1 - IQR_FENCE_MULTIPLIER * iqr;
    let upper_bound = q3 + IQR_FENCE_MULTIPLIER * iqr;

    let outliers = sorted
        .into_iter()
        .filter(|&v| v < lower_bound || v > upper_bound)
        .collect();

    Ok(outliers)
}
