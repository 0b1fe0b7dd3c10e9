//! Student's t confidence intervals
//!
//! This crate builds two-sided parametric confidence intervals of the form
//!
//! ```text
//! center ± t_critical(confidence_level, degrees_of_freedom) * scale
//! ```
//!
//! By default the interval is for the mean of a sample with missing
//! entries excluded. Every ingredient is overridable through [`CiOptions`],
//! so the same function serves intervals around externally supplied
//! estimates such as a mean difference or a regression coefficient.
//!
//! # Examples
//!
//! ## Interval for a sample mean
//!
//! ```rust
//! use research_confidence::{confidence_interval, CiOptions};
//!
//! let sample = [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), Some(5.0)];
//! let ci = confidence_interval(&sample, &CiOptions::default()).unwrap();
//! assert!(ci.contains(3.0));
//! ```
//!
//! ## Interval around an external estimate
//!
//! ```rust
//! use research_confidence::{confidence_interval, CiOptions};
//!
//! let options = CiOptions::with_level(0.99)
//!     .with_center(0.42)
//!     .with_scale(0.11)
//!     .with_degrees_of_freedom(58.0);
//! let ci = confidence_interval(&[], &options).unwrap();
//! assert!(ci.lower < 0.42 && ci.upper > 0.42);
//! ```

mod interval;
mod options;
mod types;

pub use interval::{confidence_interval, lower_confidence_bound, t_critical, upper_confidence_bound};
pub use options::{CiOptions, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_DECIMALS};
pub use types::{ConfidenceInterval, ConfidenceLevel};
