//! Correlation of two samples
//!
//! The significance test uses `t = r * sqrt((n - 2) / (1 - r^2))` with
//! `n - 2` degrees of freedom, for both coefficients.

use crate::CorrelationMethod;
use research_core::{complete_pairs, Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use tracing::trace;

/// Coefficient, two-sided p-value and the number of pairs used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub r: f64,
    pub p_value: f64,
    pub n: usize,
}

/// Pearson's r of two equally long, fully observed samples
///
/// NaN when fewer than two pairs are given or either sample is constant.
pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    let covariance = Statistics::covariance(x.iter(), y.iter());
    let r = covariance / (x.iter().std_dev() * y.iter().std_dev());
    if r.is_nan() {
        trace!(n = x.len(), "correlation undefined for a constant sample");
        return f64::NAN;
    }
    r.clamp(-1.0, 1.0)
}

/// Average ranks, starting at 1, with tied values sharing their mean rank
pub fn ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end] {
            ranks[index] = rank;
        }
        start = end + 1;
    }
    ranks
}

/// Two-sided p-value of `H0: rho = 0` for a coefficient from `n` pairs
///
/// NaN when `r` is NaN or fewer than three pairs are available.
pub fn correlation_p_value(r: f64, n: usize) -> f64 {
    if r.is_nan() || n < 3 {
        return f64::NAN;
    }
    if r.abs() == 1.0 {
        return 0.0;
    }
    let df = n as f64 - 2.0;
    let t = r * (df / (1.0 - r * r)).sqrt();
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * dist.cdf(-t.abs()),
        Err(_) => f64::NAN,
    }
}

/// Correlate fully observed samples of equal length
pub(crate) fn correlate_complete(x: &[f64], y: &[f64], method: CorrelationMethod) -> Correlation {
    let r = match method {
        CorrelationMethod::Pearson => pearson_r(x, y),
        CorrelationMethod::Spearman => pearson_r(&ranks(x), &ranks(y)),
    };
    Correlation {
        r,
        p_value: correlation_p_value(r, x.len()),
        n: x.len(),
    }
}

/// Correlate two samples, dropping every pair with a missing side
///
/// Both samples must have the same length.
///
/// ```
/// use research_correlation::{correlate, CorrelationMethod};
///
/// let x = [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)];
/// let y = [Some(2.0), Some(4.0), Some(6.0), Some(8.0), Some(10.0)];
/// let c = correlate(&x, &y, CorrelationMethod::Pearson).unwrap();
/// assert_eq!(c.n, 4);
/// assert!((c.r - 1.0).abs() < 1e-12);
/// ```
pub fn correlate(
    x: &[Option<f64>],
    y: &[Option<f64>],
    method: CorrelationMethod,
) -> Result<Correlation> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "correlation"));
    }
    let (x, y) = complete_pairs(x, y);
    Ok(correlate_complete(&x, &y, method))
}
