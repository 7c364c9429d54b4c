//! Statistical helpers for duration analysis
//!
//! All helpers treat an empty slice as zero rather than NaN so that
//! degenerate duration views can be reported without special cases.

/// Arithmetic mean, returning 0.0 for an empty slice.
///
/// # Examples
/// ```
/// use logic_capture_analyser::utils::math::safe_mean;
///
/// assert_eq!(safe_mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(safe_mean(&[]), 0.0);
/// ```
#[inline]
pub fn safe_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population standard deviation (divides by N), 0.0 for an empty slice.
///
/// # Examples
/// ```
/// use logic_capture_analyser::utils::math::population_std_dev;
///
/// assert_eq!(population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
/// assert_eq!(population_std_dev(&[]), 0.0);
/// ```
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = safe_mean(values);
    let variance =
        values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Minimum and maximum of a slice, or `None` when empty
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Calculate percentage safely for usize values, returning 0.0 if total is zero.
///
/// # Examples
/// ```
/// use logic_capture_analyser::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50, 100), 50.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);  // Zero-division guard
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
