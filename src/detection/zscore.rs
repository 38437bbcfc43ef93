//! Z-score outlier detection.
//!
//! Flags values whose standardized distance from the sample mean strictly
//! exceeds [`ZSCORE_THRESHOLD`].

use crate::error::{OutlierError, Result};
use crate::stats::{mean, std_dev};

/// Z-score magnitude above which a value is considered an outlier.
pub const ZSCORE_THRESHOLD: f64 = 3.0;

/// Detect outliers via z-scores.
///
/// Computes the sample mean and sample standard deviation (n-1
/// denominator) over the whole series, then returns every value `v`, in
/// original order, with `|(v - mean) / std_dev| > 3.0`. Values exactly at
/// the threshold are not flagged.
///
/// A series with zero variance has no outliers: when all values are
/// identical the standard deviation vanishes and an empty result is
/// returned rather than dividing by zero.
///
/// # Errors
/// Returns [`OutlierError::EmptyData`] if `series` is empty.
///
/// # Example
/// ```
/// use anofox_outliers::detection::detect_outliers_zscore;
///
/// let data = [10.0, 12.0, 12.0, 13.0, 12.0, 11.0, 14.0, 13.0, 15.0, 10.0, 100.0];
/// let outliers = detect_outliers_zscore(&data).unwrap();
/// assert_eq!(outliers, vec![100.0]);
/// ```
pub fn detect_outliers_zscore(series: &[f64]) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(OutlierError::EmptyData);
    }

    let m = mean(series);
    let sd = std_dev(series);

    // Zero variance: every value equals the mean, nothing is anomalous.
    // Also covers the single-element case, where std_dev is NaN.
    if !(sd > 1e-10) {
        return Ok(Vec::new());
    }

    let outliers = series
        .iter()
        .copied()
        .filter(|v| ((v - m) / sd).abs() > ZSCORE_THRESHOLD)
        .collect();

    Ok(outliers)
}
