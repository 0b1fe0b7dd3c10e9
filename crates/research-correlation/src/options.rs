//! Configuration types for correlation analysis

use serde::{Deserialize, Serialize};
use std::fmt;

/// Correlation coefficient to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    /// Linear correlation of the values
    #[default]
    Pearson,
    /// Pearson correlation of the average ranks
    Spearman,
}

impl CorrelationMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pearson => "Pearson",
            Self::Spearman => "Spearman",
        }
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How missing observations are removed before correlating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deletion {
    /// Each pair of variables keeps every row where both are observed
    #[default]
    Pairwise,
    /// Only rows where every variable is observed are kept
    Casewise,
}

/// Options for [`correlation_matrix`](crate::correlation_matrix)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationOptions {
    pub method: CorrelationMethod,
    pub deletion: Deletion,
}

impl CorrelationOptions {
    pub fn new(method: CorrelationMethod, deletion: Deletion) -> Self {
        Self { method, deletion }
    }

    pub fn pairwise() -> Self {
        Self::new(CorrelationMethod::default(), Deletion::Pairwise)
    }

    pub fn casewise() -> Self {
        Self::new(CorrelationMethod::default(), Deletion::Casewise)
    }

    pub fn with_method(mut self, method: CorrelationMethod) -> Self {
        self.method = method;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CorrelationOptions::default();
        assert_eq!(options.method, CorrelationMethod::Pearson);
        assert_eq!(options.deletion, Deletion::Pairwise);
    }

    #[test]
    fn test_deserializes_snake_case() {
        let options: CorrelationOptions =
            serde_json::from_str(r#"{"method": "spearman", "deletion": "casewise"}"#).unwrap();
        assert_eq!(
            options,
            CorrelationOptions::casewise().with_method(CorrelationMethod::Spearman)
        );
    }
}
