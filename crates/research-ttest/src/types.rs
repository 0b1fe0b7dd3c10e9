//! Result types of a t-test

use crate::{EffectSizes, TTestKind};
use research_confidence::{confidence_interval, CiOptions, ConfidenceInterval};
use research_core::Result;
use research_descriptive::{count, mean, standard_deviation, standard_error};
use serde::{Deserialize, Serialize};

/// One row of the descriptives table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDescriptives {
    pub label: String,
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    pub se: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

impl GroupDescriptives {
    /// Describe the non-missing observations of `sample`
    ///
    /// The interval is the t interval for the mean at `options`' level and
    /// precision.
    pub fn from_sample(
        label: impl Into<String>,
        sample: &[Option<f64>],
        options: &CiOptions,
    ) -> Result<Self> {
        let ci = confidence_interval(sample, options)?;
        Ok(Self {
            label: label.into(),
            n: count(sample),
            mean: mean(sample),
            sd: standard_deviation(sample),
            se: standard_error(sample),
            ci_lower: ci.lower,
            ci_upper: ci.upper,
        })
    }

    pub(crate) fn from_values(
        label: impl Into<String>,
        values: &[f64],
        options: &CiOptions,
    ) -> Result<Self> {
        let sample: Vec<Option<f64>> = values.iter().map(|&x| Some(x)).collect();
        Self::from_sample(label, &sample, options)
    }
}

/// Test statistics of a t-test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    pub kind: TTestKind,
    /// Mean of group 1 minus mean of group 2 (mean of the differences when paired)
    pub difference: f64,
    /// Standard error of the difference
    pub standard_error: f64,
    pub degrees_of_freedom: f64,
    pub t: f64,
    /// Two-sided p-value, `H1: difference != 0`
    pub p_two_sided: f64,
    /// One-sided p-value, `H1: difference < 0`
    pub p_difference_less: f64,
    /// One-sided p-value, `H1: difference > 0`
    pub p_difference_greater: f64,
    /// Interval for the difference
    pub difference_ci: ConfidenceInterval,
    pub effect_sizes: EffectSizes,
}

/// Descriptives and test statistics of a t-test
///
/// `descriptives` holds group 1, group 2 and then either the combined
/// sample (independent tests) or the pairwise differences (paired test).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TTestReport {
    pub descriptives: Vec<GroupDescriptives>,
    pub result: TTestResult,
}
