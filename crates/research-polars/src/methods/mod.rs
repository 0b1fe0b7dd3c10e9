//! Table implementations behind [`ResearchStatsExt`]

mod categorical;
mod correlation;
mod summary;
mod ttest;

pub use correlation::{correlation_frames, pairs_frame};
pub use summary::descriptives_frame;
pub use ttest::results_frame;

use crate::{Error, ResearchStatsExt, Result, SummaryOptions};
use polars::prelude::*;
use research_correlation::CorrelationMethod;
use research_ttest::TTestOptions;

impl ResearchStatsExt for DataFrame {
    fn summary_cont(&self, columns: &[&str], options: &SummaryOptions) -> Result<DataFrame> {
        summary::summary_cont_impl(self, columns, options)
    }

    fn ttest_columns(
        &self,
        column1: &str,
        column2: &str,
        options: &TTestOptions,
    ) -> Result<(DataFrame, DataFrame)> {
        ttest::ttest_columns_impl(self, column1, column2, options)
    }

    fn summary_cat(&self, columns: &[&str]) -> Result<DataFrame> {
        categorical::summary_cat_impl(self, columns)
    }

    fn codebook(&self, columns: &[&str]) -> Result<DataFrame> {
        categorical::codebook_impl(self, columns)
    }

    fn corr_case(
        &self,
        columns: &[&str],
        method: CorrelationMethod,
    ) -> Result<(DataFrame, DataFrame)> {
        correlation::corr_case_impl(self, columns, method)
    }

    fn corr_pair(&self, columns: &[&str], method: CorrelationMethod) -> Result<DataFrame> {
        correlation::corr_pair_impl(self, columns, method)
    }
}

fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

/// Integer and float dtypes, the ones read as samples
pub(crate) fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

/// Read a numeric column as a sample, nulls becoming missing observations
pub(crate) fn column_sample(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = lookup(df, name)?;
    if !is_numeric(column.dtype()) {
        return Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{:?}", column.dtype()),
        });
    }

    let float_column = column.cast(&DataType::Float64)?;
    let sample = float_column.f64()?.iter().collect();
    Ok(sample)
}

/// Read any column as display strings, nulls and NaN becoming `None`
pub(crate) fn column_outcomes(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = lookup(df, name)?;
    if matches!(column.dtype(), DataType::Float32 | DataType::Float64) {
        let outcomes = column_sample(df, name)?
            .into_iter()
            .map(|value| value.filter(|x| !x.is_nan()).map(|x| x.to_string()))
            .collect();
        return Ok(outcomes);
    }

    let strings = column.cast(&DataType::String)?;
    let outcomes = strings
        .str()?
        .iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(outcomes)
}
