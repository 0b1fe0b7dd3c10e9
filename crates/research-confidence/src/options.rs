//! Configuration for t-based confidence intervals

use serde::{Deserialize, Serialize};

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default number of decimal places for reported bounds
pub const DEFAULT_DECIMALS: i32 = 4;

/// Options for [`confidence_interval`](crate::confidence_interval)
///
/// Unset fields are computed from the sample: degrees of freedom as
/// `count - 1`, center as the mean and scale as the standard error. Setting
/// them builds an interval around an external estimate instead, for
/// example a mean difference and its standard error.
///
/// ```
/// use research_confidence::CiOptions;
///
/// let options = CiOptions::default()
///     .with_confidence_level(0.99)
///     .with_center(1.2)
///     .with_scale(0.3)
///     .with_degrees_of_freedom(40.0)
///     .with_decimals(2);
/// assert_eq!(options.decimals, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiOptions {
    /// Coverage probability in `[0, 1]`
    pub confidence_level: f64,
    /// Degrees of freedom of the t distribution
    pub degrees_of_freedom: Option<f64>,
    /// Point estimate the interval is centered on
    pub center: Option<f64>,
    /// Standard error the critical value is scaled by
    pub scale: Option<f64>,
    /// Decimal places both bounds are rounded to
    pub decimals: i32,
}

impl Default for CiOptions {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            degrees_of_freedom: None,
            center: None,
            scale: None,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl CiOptions {
    /// Options with the given confidence level and everything else default
    pub fn with_level(confidence_level: f64) -> Self {
        Self::default().with_confidence_level(confidence_level)
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_degrees_of_freedom(mut self, degrees_of_freedom: f64) -> Self {
        self.degrees_of_freedom = Some(degrees_of_freedom);
        self
    }

    pub fn with_center(mut self, center: f64) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = decimals;
        self
    }
}
