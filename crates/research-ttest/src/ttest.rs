//! Student, Welch and paired t-tests

use crate::effect::{
    hedges_correction, point_biserial_r, pooled_standard_deviation, standardized_difference,
};
use crate::{EffectSizes, GroupDescriptives, TTestKind, TTestOptions, TTestReport, TTestResult};
use research_confidence::{confidence_interval, CiOptions};
use research_core::{complete_pairs, observed_values, Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use tracing::debug;

/// Compare two groups with a t-test
///
/// Independent tests drop missing values from each group separately. The
/// paired test drops every pair with a missing side, and requires both
/// inputs to have the same length.
///
/// Each group needs at least two observations (two complete pairs when
/// paired).
///
/// ```
/// use research_ttest::{ttest, TTestOptions};
///
/// let control = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
/// let treatment = [Some(2.0), Some(4.0), Some(6.0), Some(8.0), Some(10.0)];
/// let report = ttest(&control, &treatment, &TTestOptions::default()).unwrap();
/// assert_eq!(report.result.degrees_of_freedom, 8.0);
/// assert!(report.result.t < 0.0);
/// ```
pub fn ttest(
    group1: &[Option<f64>],
    group2: &[Option<f64>],
    options: &TTestOptions,
) -> Result<TTestReport> {
    debug!(kind = ?options.kind, n1 = group1.len(), n2 = group2.len(), "running t-test");
    match options.kind {
        TTestKind::Student | TTestKind::Welch => independent(group1, group2, options),
        TTestKind::Paired => paired(group1, group2, options),
    }
}

fn ci_options(options: &TTestOptions) -> CiOptions {
    CiOptions::with_level(options.confidence_level).with_decimals(options.decimals)
}

fn independent(
    group1: &[Option<f64>],
    group2: &[Option<f64>],
    options: &TTestOptions,
) -> Result<TTestReport> {
    let x1 = observed_values(group1);
    let x2 = observed_values(group2);
    Error::require_observations(2, x1.len())?;
    Error::require_observations(2, x2.len())?;

    let (n1, n2) = (x1.len(), x2.len());
    let (mean1, mean2) = (x1.iter().mean(), x2.iter().mean());
    let (var1, var2) = (x1.iter().variance(), x2.iter().variance());
    let difference = mean1 - mean2;

    let pooled_sd = pooled_standard_deviation(n1, var1, n2, var2);
    let (standard_error, degrees_of_freedom) = match options.kind {
        TTestKind::Welch => {
            let (a, b) = (var1 / n1 as f64, var2 / n2 as f64);
            let df = (a + b).powi(2) / (a * a / (n1 as f64 - 1.0) + b * b / (n2 as f64 - 1.0));
            ((a + b).sqrt(), df)
        }
        _ => (
            pooled_sd * (1.0 / n1 as f64 + 1.0 / n2 as f64).sqrt(),
            (n1 + n2) as f64 - 2.0,
        ),
    };

    let t = difference / standard_error;
    let cohen_d = standardized_difference(difference, pooled_sd);
    let effect_sizes = EffectSizes {
        cohen_d,
        hedges_g: cohen_d * hedges_correction(n1, n2),
        glass_delta1: standardized_difference(difference, var1.sqrt()),
        glass_delta2: standardized_difference(difference, var2.sqrt()),
        point_biserial_r: point_biserial_r(t, degrees_of_freedom),
    };

    let ci = ci_options(options);
    let combined: Vec<f64> = x1.iter().chain(&x2).copied().collect();
    let descriptives = vec![
        GroupDescriptives::from_values(options.group1_label.as_str(), &x1, &ci)?,
        GroupDescriptives::from_values(options.group2_label.as_str(), &x2, &ci)?,
        GroupDescriptives::from_values("combined", &combined, &ci)?,
    ];

    let result = finish(
        options,
        difference,
        standard_error,
        degrees_of_freedom,
        t,
        effect_sizes,
    )?;
    Ok(TTestReport {
        descriptives,
        result,
    })
}

fn paired(
    group1: &[Option<f64>],
    group2: &[Option<f64>],
    options: &TTestOptions,
) -> Result<TTestReport> {
    if group1.len() != group2.len() {
        return Err(Error::size_mismatch(group1.len(), group2.len(), "paired samples"));
    }
    let (x1, x2) = complete_pairs(group1, group2);
    Error::require_observations(2, x1.len())?;

    let n = x1.len();
    let differences: Vec<f64> = x1.iter().zip(&x2).map(|(a, b)| a - b).collect();
    let difference = differences.iter().mean();
    let sd_difference = differences.iter().std_dev();
    let standard_error = sd_difference / (n as f64).sqrt();
    let degrees_of_freedom = n as f64 - 1.0;

    let t = difference / standard_error;
    let cohen_d = standardized_difference(difference, sd_difference);
    let effect_sizes = EffectSizes {
        cohen_d,
        hedges_g: cohen_d * hedges_correction(n, n),
        glass_delta1: standardized_difference(difference, x1.iter().std_dev()),
        glass_delta2: standardized_difference(difference, x2.iter().std_dev()),
        point_biserial_r: point_biserial_r(t, degrees_of_freedom),
    };

    let ci = ci_options(options);
    let descriptives = vec![
        GroupDescriptives::from_values(options.group1_label.as_str(), &x1, &ci)?,
        GroupDescriptives::from_values(options.group2_label.as_str(), &x2, &ci)?,
        GroupDescriptives::from_values("difference", &differences, &ci)?,
    ];

    let result = finish(
        options,
        difference,
        standard_error,
        degrees_of_freedom,
        t,
        effect_sizes,
    )?;
    Ok(TTestReport {
        descriptives,
        result,
    })
}

fn finish(
    options: &TTestOptions,
    difference: f64,
    standard_error: f64,
    degrees_of_freedom: f64,
    t: f64,
    effect_sizes: EffectSizes,
) -> Result<TTestResult> {
    let difference_ci = confidence_interval(
        &[],
        &ci_options(options)
            .with_center(difference)
            .with_scale(standard_error)
            .with_degrees_of_freedom(degrees_of_freedom),
    )?;

    let lower_tail = t_cdf(t, degrees_of_freedom);
    debug!(t, degrees_of_freedom, lower_tail, "t-test statistic");

    Ok(TTestResult {
        kind: options.kind,
        difference,
        standard_error,
        degrees_of_freedom,
        t,
        p_two_sided: 2.0 * t_cdf(-t.abs(), degrees_of_freedom),
        p_difference_less: lower_tail,
        p_difference_greater: 1.0 - lower_tail,
        difference_ci,
        effect_sizes,
    })
}

/// CDF of the standard t distribution, NaN when undefined
fn t_cdf(t: f64, degrees_of_freedom: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    match StudentsT::new(0.0, 1.0, degrees_of_freedom) {
        Ok(dist) => dist.cdf(t),
        Err(_) => f64::NAN,
    }
}
