//! Missing-data aware statistics for research reporting
//!
//! This crate re-exports the research-stats workspace:
//!
//! | Crate | Provides |
//! |-------|----------|
//! | [`research_core`] | Error type, sample helpers, half-to-even rounding |
//! | [`research_descriptive`] | Count, mean, variance, SD, SEM, range, skew, kurtosis |
//! | [`research_confidence`] | Student's t confidence intervals |
//! | [`research_ttest`] | Student, Welch and paired t-tests with effect sizes |
//! | [`research_correlation`] | Pearson and Spearman correlation matrices |
//! | `research_polars` | Summary, frequency, t-test and correlation tables as DataFrames (feature `polars`) |
//!
//! Samples are `&[Option<f64>]`; `None` and NaN entries are missing and
//! are excluded from every statistic.
//!
//! # Example
//!
//! ```rust
//! use researchstats::prelude::*;
//!
//! let scores = [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), Some(5.0)];
//! assert_eq!(count(&scores), 5);
//! assert_eq!(variance(&scores), 2.5);
//!
//! let ci = confidence_interval(&scores, &CiOptions::default()).unwrap();
//! assert_eq!(ci.bounds(), (1.0368, 4.9632));
//!
//! let doubled: Vec<Option<f64>> = scores.iter().map(|x| x.map(|v| 2.0 * v)).collect();
//! let r = correlate(&scores, &doubled, CorrelationMethod::Pearson).unwrap();
//! assert_eq!(r.n, 5);
//! assert!((r.r - 1.0).abs() < 1e-12);
//! ```

pub use research_confidence;
pub use research_core;
pub use research_correlation;
pub use research_descriptive;
#[cfg(feature = "polars")]
pub use research_polars;
pub use research_ttest;

pub use research_core::{Error, Result};

/// Commonly used items from every crate in the workspace
pub mod prelude {
    pub use research_confidence::{
        confidence_interval, lower_confidence_bound, t_critical, upper_confidence_bound,
        CiOptions, ConfidenceInterval, ConfidenceLevel,
    };
    pub use research_core::{observed, round_half_even, Error, Result, Sample};
    pub use research_correlation::{
        correlate, correlation_matrix, Correlation, CorrelationMatrix, CorrelationMethod,
        CorrelationOptions, Deletion,
    };
    pub use research_descriptive::{
        count, describe, excess_kurtosis, kurtosis, mean, skew, standard_deviation,
        standard_error, value_range, variance, Descriptives,
    };
    #[cfg(feature = "polars")]
    pub use research_polars::{ResearchStatsExt, SummaryOptions};
    pub use research_ttest::{ttest, TTestKind, TTestOptions, TTestReport};
}
