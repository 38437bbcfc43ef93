//! Statistical helpers shared by the detectors.
//!
//! All functions operate on plain `&[f64]` slices and return `NaN` when
//! the quantity is undefined, leaving precondition checks to the caller.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// Calculate the standard deviation of a slice.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Returns the value at the given quantile of an already-sorted slice.
///
/// Uses linear interpolation between bracketing elements: for quantile
/// `q` over `n` sorted values the position is `q * (n - 1)`.
///
/// # Arguments
/// * `sorted` - Input values, ascending order
/// * `q` - Quantile (0.0 to 1.0)
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let q = q.clamp(0.0, 1.0);
    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_simple_values() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0, 5.0]) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn sample_variance_uses_n_minus_one() {
        // var([2, 4, 4, 4, 5, 5, 7, 9]) with n-1 denominator = 32/7
        let v = variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((v - 32.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn variance_of_single_value_is_nan() {
        assert!(variance(&[3.0]).is_nan());
    }

    #[test]
    fn std_dev_of_constant_is_zero() {
        assert!(std_dev(&[5.0, 5.0, 5.0, 5.0]).abs() < 1e-10);
    }

    #[test]
    fn quantile_interpolates_between_elements() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // position 0.25 * 3 = 0.75 -> between 1.0 and 2.0
        assert!((quantile_sorted(&sorted, 0.25) - 1.75).abs() < 1e-10);
        assert!((quantile_sorted(&sorted, 0.75) - 3.25).abs() < 1e-10);
    }

    #[test]
    fn quantile_at_exact_positions() {
        let sorted = [10.0, 20.0, 30.0];
        assert!((quantile_sorted(&sorted, 0.0) - 10.0).abs() < 1e-10);
        assert!((quantile_sorted(&sorted, 0.5) - 20.0).abs() < 1e-10);
        assert!((quantile_sorted(&sorted, 1.0) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn quantile_of_single_element() {
        assert!((quantile_sorted(&[7.0], 0.25) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn quantile_of_empty_is_nan() {
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }
}
