//! Two-sample t-tests for research reporting
//!
//! This crate compares two samples with missing observations and reports
//! both a descriptives table and the test statistics, in the layout
//! familiar from research software.
//!
//! # Supported Tests
//!
//! - **Student**: independent samples with pooled variance
//! - **Welch**: independent samples, unequal variances, Satterthwaite df
//! - **Paired**: dependent samples tested on the pairwise differences
//!
//! Every result carries two-sided and both one-sided p-values, a
//! confidence interval for the difference and the effect sizes Cohen's d,
//! Hedges' g, Glass's delta (standardized by either group) and the
//! point-biserial r.
//!
//! # Examples
//!
//! ```rust
//! use research_ttest::{ttest, TTestOptions};
//!
//! let before = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
//! let after = [Some(2.0), Some(2.0), Some(5.0), None, Some(7.0)];
//!
//! let report = ttest(&before, &after, &TTestOptions::paired()).unwrap();
//! assert_eq!(report.descriptives[2].label, "difference");
//! assert_eq!(report.descriptives[2].n, 4);
//! println!("t({}) = {:.3}", report.result.degrees_of_freedom, report.result.t);
//! ```

mod effect;
mod options;
mod ttest;
mod types;

pub use effect::{
    hedges_correction, point_biserial_r, pooled_standard_deviation, standardized_difference,
    EffectSizes,
};
pub use options::{TTestKind, TTestOptions};
pub use ttest::ttest;
pub use types::{GroupDescriptives, TTestReport, TTestResult};
