//! Polars reporting tables for research statistics
//!
//! This crate renders the descriptive statistics, confidence intervals,
//! t-tests, frequency tables and correlations of the research-stats
//! workspace as Polars DataFrames, through a single extension trait.
//!
//! Null cells are missing observations, as are NaN values. Columns of any
//! integer or float dtype are read as `f64`.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use research_polars::{ResearchStatsExt, SummaryOptions};
//!
//! let df = df!["score" => [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), Some(5.0)]].unwrap();
//! let summary = df.summary_cont(&["score"], &SummaryOptions::default()).unwrap();
//! assert_eq!(summary.shape(), (1, 7));
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::SummaryOptions;
pub use error::{Error, Result};
pub use methods::{correlation_frames, descriptives_frame, pairs_frame, results_frame};
pub use traits::ResearchStatsExt;

// Re-export commonly used types from dependencies
pub use research_correlation::CorrelationMethod;
pub use research_ttest::{TTestKind, TTestOptions};
