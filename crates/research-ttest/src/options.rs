//! Configuration types for t-tests

use research_confidence::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_DECIMALS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which t-test to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TTestKind {
    /// Independent samples, pooled variance
    #[default]
    Student,
    /// Independent samples, unequal variances with Satterthwaite degrees of freedom
    Welch,
    /// Dependent samples, tested on the pairwise differences
    Paired,
}

impl TTestKind {
    /// Get the name of this test
    pub fn name(&self) -> &'static str {
        match self {
            Self::Student => "Independent t-test",
            Self::Welch => "Welch's t-test",
            Self::Paired => "Paired samples t-test",
        }
    }

    pub fn is_independent(&self) -> bool {
        !matches!(self, Self::Paired)
    }
}

impl fmt::Display for TTestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for [`ttest`](crate::ttest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TTestOptions {
    pub kind: TTestKind,
    /// Confidence level of every reported interval
    pub confidence_level: f64,
    /// Decimal places interval bounds are rounded to
    pub decimals: i32,
    /// Row label of the first group
    pub group1_label: String,
    /// Row label of the second group
    pub group2_label: String,
}

impl Default for TTestOptions {
    fn default() -> Self {
        Self {
            kind: TTestKind::default(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            decimals: DEFAULT_DECIMALS,
            group1_label: "group 1".to_string(),
            group2_label: "group 2".to_string(),
        }
    }
}

impl TTestOptions {
    pub fn new(kind: TTestKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn welch() -> Self {
        Self::new(TTestKind::Welch)
    }

    pub fn paired() -> Self {
        Self::new(TTestKind::Paired)
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Label the two groups in the descriptives
    pub fn with_labels(mut self, group1: impl Into<String>, group2: impl Into<String>) -> Self {
        self.group1_label = group1.into();
        self.group2_label = group2.into();
        self
    }
}
