//! Effect sizes reported alongside a t-test
//!
//! - **Cohen's d**: mean difference over the pooled standard deviation
//!   (independent) or over the standard deviation of the differences
//!   (paired)
//! - **Hedges' g**: Cohen's d times `J = 1 - 3 / (4 (n1 + n2) - 9)`
//! - **Glass's delta**: mean difference over one group's standard deviation
//! - **Point-biserial r**: `t / sqrt(t^2 + df)`

use serde::{Deserialize, Serialize};

/// Effect sizes of a two-group comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSizes {
    pub cohen_d: f64,
    pub hedges_g: f64,
    /// Standardized by the first group's standard deviation
    pub glass_delta1: f64,
    /// Standardized by the second group's standard deviation
    pub glass_delta2: f64,
    pub point_biserial_r: f64,
}

/// Pooled standard deviation of two independent groups
pub fn pooled_standard_deviation(n1: usize, var1: f64, n2: usize, var2: f64) -> f64 {
    let df = (n1 + n2) as f64 - 2.0;
    if df <= 0.0 {
        return f64::NAN;
    }
    (((n1 as f64 - 1.0) * var1 + (n2 as f64 - 1.0) * var2) / df).sqrt()
}

/// Hedges' small-sample bias correction factor
pub fn hedges_correction(n1: usize, n2: usize) -> f64 {
    1.0 - 3.0 / (4.0 * (n1 + n2) as f64 - 9.0)
}

/// Standardized difference `difference / scale`
pub fn standardized_difference(difference: f64, scale: f64) -> f64 {
    difference / scale
}

/// Point-biserial correlation recovered from a t statistic
pub fn point_biserial_r(t: f64, degrees_of_freedom: f64) -> f64 {
    t / (t * t + degrees_of_freedom).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pooled_standard_deviation() {
        assert_relative_eq!(pooled_standard_deviation(5, 2.5, 5, 10.0), 2.5);
        // Unequal sizes weight by n - 1
        assert_relative_eq!(
            pooled_standard_deviation(3, 1.0, 5, 4.0),
            ((2.0 + 16.0) / 6.0f64).sqrt()
        );
        assert!(pooled_standard_deviation(1, 0.0, 1, 0.0).is_nan());
    }

    #[test]
    fn test_hedges_correction_shrinks_small_samples() {
        assert_relative_eq!(hedges_correction(5, 5), 1.0 - 3.0 / 31.0);
        assert!(hedges_correction(5, 5) < hedges_correction(50, 50));
        assert!(hedges_correction(500, 500) > 0.999);
    }

    #[test]
    fn test_point_biserial_r() {
        assert_relative_eq!(point_biserial_r(0.0, 10.0), 0.0);
        assert_relative_eq!(point_biserial_r(3.0, 16.0), 0.6);
        assert_relative_eq!(point_biserial_r(-3.0, 16.0), -0.6);
    }
}
