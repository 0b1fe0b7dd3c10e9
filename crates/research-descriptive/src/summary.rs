//! All descriptive statistics of a sample in one pass-through struct

use crate::{
    count, kurtosis, mean, skew, standard_deviation, standard_error, value_range, variance,
};
use serde::{Deserialize, Serialize};

/// Descriptive statistics of a sample's non-missing observations
///
/// Undefined statistics are stored as NaN, following the same rules as the
/// individual functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Descriptives {
    /// Number of non-missing observations
    pub n: usize,
    /// Number of missing entries
    pub missing: usize,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub standard_error: f64,
    pub range: f64,
    pub skew: f64,
    /// Pearson (non-excess) kurtosis
    pub kurtosis: f64,
}

/// Compute every descriptive statistic of `sample`
pub fn describe(sample: &[Option<f64>]) -> Descriptives {
    let n = count(sample);
    Descriptives {
        n,
        missing: sample.len() - n,
        mean: mean(sample),
        variance: variance(sample),
        standard_deviation: standard_deviation(sample),
        standard_error: standard_error(sample),
        range: value_range(sample),
        skew: skew(sample),
        kurtosis: kurtosis(sample),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_describe_matches_individual_functions() {
        let sample = [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)];
        let d = describe(&sample);
        assert_eq!(d.n, 4);
        assert_eq!(d.missing, 1);
        assert_relative_eq!(d.mean, 3.0);
        assert_eq!(d.variance, variance(&sample));
        assert_eq!(d.standard_error, standard_error(&sample));
        assert_eq!(d.range, 4.0);
        assert_eq!(d.kurtosis, kurtosis(&sample));
    }

    #[test]
    fn test_describe_empty() {
        let d = describe(&[]);
        assert_eq!(d.n, 0);
        assert_eq!(d.missing, 0);
        assert!(d.mean.is_nan());
        assert!(d.range.is_nan());
    }

    #[test]
    fn test_describe_serializes() {
        let d = describe(&[Some(1.0), Some(3.0)]);
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["n"], 2);
        assert_eq!(json["mean"], 2.0);
    }
}
