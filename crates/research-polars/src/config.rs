//! Configuration types for the reporting tables

use research_confidence::{CiOptions, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_DECIMALS};
use serde::{Deserialize, Serialize};

/// Options for [`summary_cont`](crate::ResearchStatsExt::summary_cont)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Confidence level of the interval for each mean
    pub confidence_level: f64,
    /// Decimal places interval bounds are rounded to
    pub decimals: i32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl SummaryOptions {
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    pub(crate) fn ci_options(&self) -> CiOptions {
        CiOptions::with_level(self.confidence_level).with_decimals(self.decimals)
    }
}
