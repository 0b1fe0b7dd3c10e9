//! Core types for missing-data aware research statistics
//!
//! This crate holds the pieces every other research-stats crate builds on:
//!
//! - [`Error`] and [`Result`], the unified error type
//! - [`Sample`] and the [`observed`] iterator, which make missingness
//!   explicit as `Option<f64>`
//! - [`round_half_even`], the rounding rule used for reported values
//!
//! # Example
//!
//! ```rust
//! use research_core::{observed, Sample};
//!
//! let sample = Sample::from_values(&[1.0, 2.0, f64::NAN, 4.0, 5.0]);
//! assert_eq!(sample.missing(), 1);
//! assert_eq!(observed(&sample).sum::<f64>(), 12.0);
//! ```

pub mod error;
pub mod math;
pub mod sample;

pub use error::{Error, Result};
pub use math::{decimal_places, round_half_even};
pub use sample::{complete_pairs, is_observed, observed, observed_values, Sample};
