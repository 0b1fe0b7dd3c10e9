//! Missing-data aware descriptive statistics
//!
//! Every function in this crate takes a sample as `&[Option<f64>]` and
//! excludes missing entries (`None`, or `Some(NaN)`) before computing its
//! statistic. Degenerate samples never raise: they evaluate to NaN.
//!
//! # Conventions
//!
//! | Statistic | Definition | Undefined when |
//! |-----------|------------|----------------|
//! | [`count`] | non-missing entries | never (0) |
//! | [`variance`] | Bessel-corrected, `n - 1` | n < 2 |
//! | [`standard_deviation`] | `sqrt(variance)` | n < 2 |
//! | [`standard_error`] | `sd / sqrt(n)` | n < 2 |
//! | [`value_range`] | `max - min` | n = 0 |
//! | [`skew`] | Fisher-Pearson `m3 / m2^1.5` | n = 0 or no spread |
//! | [`kurtosis`] | Pearson `m4 / m2^2` (normal = 3) | n = 0 or no spread |
//!
//! # Example
//!
//! ```rust
//! use research_descriptive::{count, value_range, variance};
//!
//! let sample = [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0)];
//! assert_eq!(count(&sample), 4);
//! assert_eq!(value_range(&sample), 4.0);
//! assert!(variance(&[Some(1.0)]).is_nan());
//! ```

mod dispersion;
mod location;
mod moments;
mod summary;

pub use dispersion::{standard_deviation, standard_error, value_range, variance};
pub use location::{count, mean};
pub use moments::{excess_kurtosis, kurtosis, skew};
pub use summary::{describe, Descriptives};
