//! Variance, standard deviation, standard error and range
//!
//! All estimators here use Bessel's correction (divide by n - 1) and
//! evaluate to NaN when fewer than two observations are present. Callers
//! that need a guarded result should check [`count`](crate::count) first.

use crate::count;
use research_core::observed;
use statrs::statistics::Statistics;
use tracing::trace;

/// Sample variance of the non-missing observations, `ddof = 1`
pub fn variance(sample: &[Option<f64>]) -> f64 {
    Statistics::variance(observed(sample))
}

/// Sample standard deviation, the square root of [`variance`]
pub fn standard_deviation(sample: &[Option<f64>]) -> f64 {
    Statistics::std_dev(observed(sample))
}

/// Standard error of the mean: `sd / sqrt(n)`
pub fn standard_error(sample: &[Option<f64>]) -> f64 {
    let n = count(sample);
    if n < 2 {
        trace!(n, "standard error undefined for fewer than two observations");
        return f64::NAN;
    }
    standard_deviation(sample) / (n as f64).sqrt()
}

/// Difference between the largest and smallest observation
///
/// NaN when every entry is missing.
pub fn value_range(sample: &[Option<f64>]) -> f64 {
    if count(sample) == 0 {
        trace!("range undefined for an all-missing sample");
        return f64::NAN;
    }
    Statistics::max(observed(sample)) - Statistics::min(observed(sample))
}
