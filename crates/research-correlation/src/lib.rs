//! Correlation analysis for samples with missing observations
//!
//! - [`correlate`]: Pearson or Spearman coefficient of two samples with a
//!   two-sided p-value, dropping incomplete pairs
//! - [`correlation_matrix`]: every pair of several variables, with
//!   [`Deletion::Pairwise`] or [`Deletion::Casewise`] handling of missing
//!   rows
//!
//! Degenerate inputs (fewer than two pairs, a constant variable) give NaN
//! coefficients; p-values need at least three pairs.
//!
//! # Example
//!
//! ```rust
//! use research_correlation::{correlation_matrix, CorrelationMethod, CorrelationOptions};
//!
//! let height = [Some(150.0), Some(160.0), Some(170.0), None, Some(180.0)];
//! let weight = [Some(50.0), Some(58.0), Some(66.0), Some(70.0), Some(81.0)];
//! let options = CorrelationOptions::pairwise().with_method(CorrelationMethod::Spearman);
//!
//! let m = correlation_matrix(&[("height", &height[..]), ("weight", &weight[..])], &options).unwrap();
//! assert!((m.r[0][1] - 1.0).abs() < 1e-12);
//! assert_eq!(m.n[0][1], 4);
//! ```

mod coefficient;
mod matrix;
mod options;

pub use coefficient::{correlate, correlation_p_value, pearson_r, ranks, Correlation};
pub use matrix::{correlation_matrix, CorrelationMatrix, PairCorrelation};
pub use options::{CorrelationMethod, CorrelationOptions, Deletion};
