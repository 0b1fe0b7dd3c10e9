//! Observation counts and central tendency

use research_core::{is_observed, observed};
use statrs::statistics::Statistics;

/// Count the non-missing observations
///
/// Empty and all-missing samples count as zero.
///
/// ```
/// use research_descriptive::count;
///
/// assert_eq!(count(&[Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)]), 4);
/// ```
pub fn count(sample: &[Option<f64>]) -> usize {
    sample.iter().filter(|v| is_observed(v)).count()
}

/// Arithmetic mean of the non-missing observations
///
/// NaN when nothing is observed.
pub fn mean(sample: &[Option<f64>]) -> f64 {
    Statistics::mean(observed(sample))
}
