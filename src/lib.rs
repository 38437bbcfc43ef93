//! # anofox-outliers
//!
//! Univariate outlier detection library.
//!
//! Provides two independent detectors over a one-dimensional numeric
//! sample: a z-score method that flags values whose standardized distance
//! from the sample mean exceeds 3.0, and an IQR method that flags values
//! outside the Tukey fence `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
//!
//! Both detectors are pure functions over `&[f64]`: they never mutate
//! their input and allocate a fresh result per call, so concurrent use
//! on shared samples needs no synchronization.

pub mod detection;
pub mod error;
pub mod stats;

pub use error::{OutlierError, Result};

pub mod prelude {
    pub use crate::detection::{detect_outliers_iqr, detect_outliers_zscore};
    pub use crate::detection::{IQR_FENCE_MULTIPLIER, ZSCORE_THRESHOLD};
    pub use crate::error::{OutlierError, Result};
}
