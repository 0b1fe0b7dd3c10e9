//! Extension trait for research reporting on Polars DataFrames

use crate::{Result, SummaryOptions};
use polars::prelude::*;
use research_correlation::CorrelationMethod;
use research_ttest::TTestOptions;

/// Extension trait producing research-style tables from a DataFrame
pub trait ResearchStatsExt {
    /// Summarize continuous columns
    ///
    /// # Arguments
    /// * `columns` - Column names to summarize, one output row each
    /// * `options` - Confidence level and rounding of the mean's interval
    ///
    /// # Returns
    /// DataFrame with columns `Variable`, `N`, `Mean`, `SD`, `SE` and the
    /// interval bounds, e.g. `95% Conf. Lower` and `95% Conf. Upper`.
    /// Nulls and NaN are treated as missing.
    fn summary_cont(&self, columns: &[&str], options: &SummaryOptions) -> Result<DataFrame>;

    /// Compare two columns with a t-test
    ///
    /// Rows of the descriptives table are labelled with the column names.
    ///
    /// # Returns
    /// The descriptives table (same layout as [`summary_cont`]) and the
    /// results table with columns `Statistic` and `Value`.
    ///
    /// [`summary_cont`]: ResearchStatsExt::summary_cont
    fn ttest_columns(
        &self,
        column1: &str,
        column2: &str,
        options: &TTestOptions,
    ) -> Result<(DataFrame, DataFrame)>;

    /// Frequency table of categorical columns
    ///
    /// # Returns
    /// DataFrame with columns `Variable`, `Outcome`, `Count` and `Percent`,
    /// one row per distinct non-missing value. Outcomes are ordered by
    /// descending count, ties by outcome. Percentages are of the
    /// non-missing values and rounded to two places.
    fn summary_cat(&self, columns: &[&str]) -> Result<DataFrame>;

    /// Overview of columns of any type
    ///
    /// # Returns
    /// DataFrame with columns `Variable`, `Data Type`, `N`, `Missing`,
    /// `Unique`, `Mean`, `SD`, `Min` and `Max`. The last four are null for
    /// non-numeric columns.
    fn codebook(&self, columns: &[&str]) -> Result<DataFrame>;

    /// Correlation matrix after casewise deletion
    ///
    /// Only rows where every listed column is observed are used.
    ///
    /// # Returns
    /// The coefficient matrix and the p-value matrix, each with a
    /// `Variable` column followed by one column per variable.
    fn corr_case(
        &self,
        columns: &[&str],
        method: CorrelationMethod,
    ) -> Result<(DataFrame, DataFrame)>;

    /// Correlation of every pair of columns after pairwise deletion
    ///
    /// # Returns
    /// DataFrame with columns `Pair` (`"a & b"`), `r`, `p-value` and `N`.
    fn corr_pair(&self, columns: &[&str], method: CorrelationMethod) -> Result<DataFrame>;
}
