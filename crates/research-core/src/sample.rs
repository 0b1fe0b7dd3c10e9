//! Samples with explicitly missing observations
//!
//! Statistics in this workspace operate on `&[Option<f64>]`. `None` marks
//! a missing observation. A `Some(NaN)` is treated the same way so that
//! data arriving with NaN placeholders behaves like data with nulls.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Whether an entry counts as an observation
#[inline]
pub fn is_observed(value: &Option<f64>) -> bool {
    matches!(value, Some(x) if !x.is_nan())
}

/// Iterate over the non-missing observations of a sample, in order
pub fn observed(sample: &[Option<f64>]) -> impl Iterator<Item = f64> + Clone + '_ {
    sample.iter().copied().filter_map(|value| match value {
        Some(x) if !x.is_nan() => Some(x),
        _ => None,
    })
}

/// Collect the non-missing observations of a sample
pub fn observed_values(sample: &[Option<f64>]) -> Vec<f64> {
    observed(sample).collect()
}

/// Drop every position where either sample is missing
///
/// Returns the complete pairs as two aligned vectors. Samples of unequal
/// length are truncated to the shorter one; callers that need equal
/// lengths must check beforehand.
pub fn complete_pairs(first: &[Option<f64>], second: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    first
        .iter()
        .zip(second)
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
            _ => None,
        })
        .unzip()
}

/// An owned sample of optional observations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<Option<f64>>,
}

impl Sample {
    /// Create a sample from optional observations
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// Create a sample from raw values, treating NaN as missing
    pub fn from_values(values: &[f64]) -> Self {
        values.iter().copied().collect()
    }

    /// Number of entries, missing ones included
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing entries
    pub fn missing(&self) -> usize {
        self.values.iter().filter(|v| !is_observed(v)).count()
    }

    /// Iterate over the non-missing observations
    pub fn observed(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        observed(&self.values)
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn into_inner(self) -> Vec<Option<f64>> {
        self.values
    }
}

impl Deref for Sample {
    type Target = [Option<f64>];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl AsRef<[Option<f64>]> for Sample {
    fn as_ref(&self) -> &[Option<f64>] {
        &self.values
    }
}

impl From<Vec<Option<f64>>> for Sample {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::new(values)
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Self::from_values(values)
    }
}

impl FromIterator<Option<f64>> for Sample {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter()
            .map(|x| if x.is_nan() { None } else { Some(x) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_skips_none_and_nan() {
        let sample = vec![Some(1.0), None, Some(f64::NAN), Some(4.0)];
        assert_eq!(observed_values(&sample), vec![1.0, 4.0]);
    }

    #[test]
    fn test_sample_from_values_marks_nan_missing() {
        let sample = Sample::from_values(&[1.0, 2.0, f64::NAN, 4.0, 5.0]);
        assert_eq!(sample.len(), 5);
        assert_eq!(sample.missing(), 1);
        assert_eq!(sample[2], None);
        assert_eq!(sample.observed().count(), 4);
    }

    #[test]
    fn test_sample_derefs_to_slice() {
        fn total(values: &[Option<f64>]) -> f64 {
            observed(values).sum()
        }
        let sample: Sample = vec![Some(1.0), None, Some(2.0)].into();
        assert_eq!(total(&sample), 3.0);
    }

    #[test]
    fn test_complete_pairs() {
        let first = [Some(1.0), None, Some(3.0), Some(4.0)];
        let second = [Some(2.0), Some(5.0), Some(f64::NAN), Some(8.0)];
        let (a, b) = complete_pairs(&first, &second);
        assert_eq!(a, vec![1.0, 4.0]);
        assert_eq!(b, vec![2.0, 8.0]);
    }

    #[test]
    fn test_sample_serializes_nulls() {
        let sample: Sample = vec![Some(1.5), None].into();
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, "[1.5,null]");
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }
}
