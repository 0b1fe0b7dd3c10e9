//! Two-sided Student's t confidence intervals

use crate::{CiOptions, ConfidenceInterval, ConfidenceLevel};
use research_core::{round_half_even, Error, Result};
use research_descriptive::{count, mean, standard_error};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, trace};

/// Two-sided critical value of the t distribution
///
/// Returns `q` such that `P(-q <= T <= q) = confidence_level` for `T` with
/// `degrees_of_freedom` degrees of freedom. Degrees of freedom that are not
/// positive give NaN.
pub fn t_critical(confidence_level: f64, degrees_of_freedom: f64) -> Result<f64> {
    let level = ConfidenceLevel::new(confidence_level)?;

    if degrees_of_freedom.is_nan() || degrees_of_freedom <= 0.0 {
        trace!(degrees_of_freedom, "t distribution undefined");
        return Ok(f64::NAN);
    }
    if level.value() == 0.0 {
        return Ok(0.0);
    }
    if level.value() == 1.0 {
        return Ok(f64::INFINITY);
    }

    let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    Ok(t_dist.inverse_cdf(1.0 - level.tail_probability()))
}

/// Confidence interval `center ± t_critical * scale` with rounded bounds
///
/// With default [`CiOptions`] the interval is for the mean of `sample`:
/// degrees of freedom `count - 1`, center the mean and scale the standard
/// error of the non-missing observations. Any of the three can be
/// overridden, in which case the sample is not consulted for it.
///
/// Both bounds are rounded independently to `options.decimals` places,
/// ties to even. Undefined inputs (too few observations, a scale that is
/// NaN or not positive) give NaN bounds; only an invalid confidence level
/// is an error.
///
/// ```
/// use research_confidence::{confidence_interval, CiOptions};
///
/// let sample = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
/// let ci = confidence_interval(&sample, &CiOptions::default()).unwrap();
/// assert_eq!(ci.bounds(), (1.0368, 4.9632));
/// ```
pub fn confidence_interval(
    sample: &[Option<f64>],
    options: &CiOptions,
) -> Result<ConfidenceInterval> {
    let degrees_of_freedom = options
        .degrees_of_freedom
        .unwrap_or_else(|| count(sample) as f64 - 1.0);
    let center = options.center.unwrap_or_else(|| mean(sample));
    let scale = options.scale.unwrap_or_else(|| standard_error(sample));

    debug!(
        confidence_level = options.confidence_level,
        degrees_of_freedom, center, scale, "building t confidence interval"
    );

    let critical = t_critical(options.confidence_level, degrees_of_freedom)?;
    let (lower, upper) = t_interval(center, scale, critical);

    Ok(ConfidenceInterval::new(
        round_half_even(lower, options.decimals),
        round_half_even(upper, options.decimals),
        center,
        options.confidence_level,
    ))
}

/// Lower bound of [`confidence_interval`], same defaults and rounding
pub fn lower_confidence_bound(sample: &[Option<f64>], options: &CiOptions) -> Result<f64> {
    confidence_interval(sample, options).map(|ci| ci.lower)
}

/// Upper bound of [`confidence_interval`], same defaults and rounding
pub fn upper_confidence_bound(sample: &[Option<f64>], options: &CiOptions) -> Result<f64> {
    confidence_interval(sample, options).map(|ci| ci.upper)
}

fn t_interval(center: f64, scale: f64, critical: f64) -> (f64, f64) {
    // The t distribution needs a positive scale
    if center.is_nan() || critical.is_nan() || scale.is_nan() || scale <= 0.0 {
        trace!(center, scale, critical, "confidence interval undefined");
        return (f64::NAN, f64::NAN);
    }

    let margin = critical * scale;
    (center - margin, center + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().map(|&x| Some(x)).collect()
    }

    #[test]
    fn test_t_critical_reference_values() {
        assert_abs_diff_eq!(t_critical(0.95, 4.0).unwrap(), 2.776_445_105, epsilon = 1e-6);
        assert_abs_diff_eq!(t_critical(0.95, 10.0).unwrap(), 2.228_138_852, epsilon = 1e-6);
        assert_abs_diff_eq!(t_critical(0.99, 30.0).unwrap(), 2.749_995_654, epsilon = 1e-6);
        assert_abs_diff_eq!(t_critical(0.90, 1.0).unwrap(), 6.313_751_515, epsilon = 1e-5);
    }

    #[test]
    fn test_t_critical_edges() {
        assert_eq!(t_critical(0.0, 5.0).unwrap(), 0.0);
        assert_eq!(t_critical(1.0, 5.0).unwrap(), f64::INFINITY);
        assert!(t_critical(0.95, 0.0).unwrap().is_nan());
        assert!(t_critical(0.95, f64::NAN).unwrap().is_nan());
        assert!(t_critical(1.01, 5.0).is_err());
        assert!(t_critical(-0.5, 5.0).is_err());
    }

    #[test]
    fn test_mean_interval() {
        let data = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let ci = confidence_interval(&data, &CiOptions::default()).unwrap();
        assert_abs_diff_eq!(ci.lower, 1.0368, epsilon = 1e-4);
        assert_abs_diff_eq!(ci.upper, 4.9632, epsilon = 1e-4);
        assert_eq!(ci.estimate, 3.0);
        assert_eq!(ci.confidence_level, 0.95);
    }

    #[test]
    fn test_missing_entries_ignored() {
        let gappy = vec![Some(1.0), None, Some(2.0), Some(3.0), Some(f64::NAN), Some(4.0), Some(5.0)];
        let dense = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let options = CiOptions::default();
        assert_eq!(
            confidence_interval(&gappy, &options).unwrap(),
            confidence_interval(&dense, &options).unwrap()
        );
    }

    #[test]
    fn test_overrides_match_manual_computation() {
        let options = CiOptions::default()
            .with_center(10.0)
            .with_scale(2.0)
            .with_degrees_of_freedom(20.0)
            .with_decimals(6);
        let critical = t_critical(0.95, 20.0).unwrap();
        let ci = confidence_interval(&[], &options).unwrap();
        assert_abs_diff_eq!(ci.lower, 10.0 - critical * 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ci.upper, 10.0 + critical * 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_decimals() {
        let data = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let ci = confidence_interval(&data, &CiOptions::default().with_decimals(2)).unwrap();
        assert_eq!(ci.bounds(), (1.04, 4.96));
        let ci = confidence_interval(&data, &CiOptions::default().with_decimals(0)).unwrap();
        assert_eq!(ci.bounds(), (1.0, 5.0));
    }

    #[test]
    fn test_single_sided_wrappers() {
        let data = sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let options = CiOptions::with_level(0.9);
        let ci = confidence_interval(&data, &options).unwrap();
        assert_eq!(lower_confidence_bound(&data, &options).unwrap(), ci.lower);
        assert_eq!(upper_confidence_bound(&data, &options).unwrap(), ci.upper);
    }

    #[test]
    fn test_degenerate_samples_give_nan() {
        let ci = confidence_interval(&[Some(3.0)], &CiOptions::default()).unwrap();
        assert!(ci.lower.is_nan() && ci.upper.is_nan());
        let ci = confidence_interval(&[], &CiOptions::default()).unwrap();
        assert!(!ci.is_defined());
        let negative_scale = CiOptions::default()
            .with_center(0.0)
            .with_scale(-1.0)
            .with_degrees_of_freedom(3.0);
        let ci = confidence_interval(&[], &negative_scale).unwrap();
        assert!(!ci.is_defined());
    }

    #[test]
    fn test_zero_spread_is_undefined() {
        let data = sample(&[4.0, 4.0, 4.0]);
        for level in [0.0, 0.95, 1.0] {
            let ci = confidence_interval(&data, &CiOptions::with_level(level)).unwrap();
            assert!(ci.lower.is_nan() && ci.upper.is_nan(), "level {level}");
            assert_eq!(ci.estimate, 4.0);
        }

        let zero_scale = CiOptions::default()
            .with_center(1.0)
            .with_scale(0.0)
            .with_degrees_of_freedom(10.0);
        let ci = confidence_interval(&[], &zero_scale).unwrap();
        assert!(!ci.is_defined());
    }

    #[test]
    fn test_invalid_level_is_error() {
        let data = sample(&[1.0, 2.0, 3.0]);
        let err = confidence_interval(&data, &CiOptions::with_level(95.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_full_coverage_is_unbounded() {
        let data = sample(&[1.0, 2.0, 3.0]);
        let ci = confidence_interval(&data, &CiOptions::with_level(1.0)).unwrap();
        assert_eq!(ci.bounds(), (f64::NEG_INFINITY, f64::INFINITY));
    }
}
