//! Correlation tables

use super::column_sample;
use crate::Result;
use polars::prelude::*;
use research_correlation::{
    correlation_matrix, CorrelationMatrix, CorrelationMethod, CorrelationOptions, Deletion,
};

fn matrix_frame(matrix: &CorrelationMatrix, values: &[Vec<f64>]) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(matrix.len() + 1);
    columns.push(Column::new("Variable".into(), matrix.variables.clone()));
    for (j, name) in matrix.variables.iter().enumerate() {
        let entries: Vec<f64> = values.iter().map(|row| row[j]).collect();
        columns.push(Column::new(name.as_str().into(), entries));
    }
    Ok(DataFrame::new(columns)?)
}

/// Render a correlation matrix as coefficient and p-value tables
///
/// Each table has a `Variable` column followed by one column per variable.
pub fn correlation_frames(matrix: &CorrelationMatrix) -> Result<(DataFrame, DataFrame)> {
    Ok((
        matrix_frame(matrix, &matrix.r)?,
        matrix_frame(matrix, &matrix.p_values)?,
    ))
}

/// Render the pairs of a correlation matrix, one row per pair
///
/// Columns are `Pair` (`"a & b"`), `r`, `p-value` and `N`.
pub fn pairs_frame(matrix: &CorrelationMatrix) -> Result<DataFrame> {
    let pairs = matrix.pairs();
    let labels: Vec<String> = pairs
        .iter()
        .map(|p| format!("{} & {}", p.first, p.second))
        .collect();
    let r: Vec<f64> = pairs.iter().map(|p| p.correlation.r).collect();
    let p_values: Vec<f64> = pairs.iter().map(|p| p.correlation.p_value).collect();
    let n: Vec<u64> = pairs.iter().map(|p| p.correlation.n as u64).collect();

    Ok(DataFrame::new(vec![
        Column::new("Pair".into(), labels),
        Column::new("r".into(), r),
        Column::new("p-value".into(), p_values),
        Column::new("N".into(), n),
    ])?)
}

fn columns_matrix(
    df: &DataFrame,
    columns: &[&str],
    options: &CorrelationOptions,
) -> Result<CorrelationMatrix> {
    let samples = columns
        .iter()
        .map(|name| column_sample(df, name))
        .collect::<Result<Vec<_>>>()?;
    let variables: Vec<(&str, &[Option<f64>])> = columns
        .iter()
        .copied()
        .zip(samples.iter().map(Vec::as_slice))
        .collect();
    Ok(correlation_matrix(&variables, options)?)
}

pub(crate) fn corr_case_impl(
    df: &DataFrame,
    columns: &[&str],
    method: CorrelationMethod,
) -> Result<(DataFrame, DataFrame)> {
    let options = CorrelationOptions::new(method, Deletion::Casewise);
    correlation_frames(&columns_matrix(df, columns, &options)?)
}

pub(crate) fn corr_pair_impl(
    df: &DataFrame,
    columns: &[&str],
    method: CorrelationMethod,
) -> Result<DataFrame> {
    let options = CorrelationOptions::new(method, Deletion::Pairwise);
    pairs_frame(&columns_matrix(df, columns, &options)?)
}
