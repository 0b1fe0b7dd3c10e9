//! Higher-order moments: skewness and kurtosis
//!
//! Both statistics use biased (population) central moments of the
//! non-missing observations, the classic textbook definitions:
//!
//! - skew `g1 = m3 / m2^(3/2)` (Fisher-Pearson coefficient)
//! - kurtosis `b2 = m4 / m2^2` (Pearson's definition, *not* excess)
//!
//! Pearson kurtosis of a normal distribution is 3. Libraries that report
//! excess kurtosis subtract that 3; this module does not.

use crate::mean;
use research_core::observed;
use tracing::trace;

/// Second, third and fourth central moments, divided by `n`
#[derive(Debug, Clone, Copy)]
struct CentralMoments {
    m2: f64,
    m3: f64,
    m4: f64,
}

fn central_moments(sample: &[Option<f64>]) -> Option<CentralMoments> {
    let center = mean(sample);
    if center.is_nan() {
        return None;
    }

    let (mut n, mut m2, mut m3, mut m4) = (0usize, 0.0, 0.0, 0.0);
    for x in observed(sample) {
        let d = x - center;
        let d2 = d * d;
        n += 1;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    let n = n as f64;

    Some(CentralMoments {
        m2: m2 / n,
        m3: m3 / n,
        m4: m4 / n,
    })
}

/// Fisher-Pearson skewness of the non-missing observations
///
/// NaN when nothing is observed or every observation is equal.
pub fn skew(sample: &[Option<f64>]) -> f64 {
    match central_moments(sample) {
        Some(m) if m.m2 > 0.0 => m.m3 / m.m2.powf(1.5),
        _ => {
            trace!("skew undefined for a sample without spread");
            f64::NAN
        }
    }
}

/// Pearson (non-excess) kurtosis of the non-missing observations
///
/// A normal distribution yields about 3.0. NaN when nothing is observed
/// or every observation is equal.
pub fn kurtosis(sample: &[Option<f64>]) -> f64 {
    match central_moments(sample) {
        Some(m) if m.m2 > 0.0 => m.m4 / (m.m2 * m.m2),
        _ => {
            trace!("kurtosis undefined for a sample without spread");
            f64::NAN
        }
    }
}

/// Excess kurtosis, [`kurtosis`] minus 3
pub fn excess_kurtosis(sample: &[Option<f64>]) -> f64 {
    kurtosis(sample) - 3.0
}
