//! Frequency tables and codebooks

use super::{column_outcomes, column_sample, is_numeric, lookup};
use crate::Result;
use polars::prelude::*;
use research_core::{observed, round_half_even};
use research_descriptive::describe;
use statrs::statistics::Statistics;
use std::collections::HashMap;
use tracing::debug;

/// Distinct outcomes with their counts, most frequent first
fn frequencies(outcomes: &[Option<String>]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for outcome in outcomes.iter().flatten() {
        *counts.entry(outcome.as_str()).or_default() += 1;
    }
    let mut frequencies: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(outcome, count)| (outcome.to_string(), count))
        .collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies
}

pub(crate) fn summary_cat_impl(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut variables = Vec::new();
    let mut outcomes = Vec::new();
    let mut counts = Vec::new();
    let mut percents = Vec::new();

    for col_name in columns {
        let values = column_outcomes(df, col_name)?;
        let table = frequencies(&values);
        let total: usize = table.iter().map(|(_, count)| count).sum();
        debug!(column = *col_name, distinct = table.len(), total, "tabulating column");

        for (outcome, count) in table {
            variables.push(col_name.to_string());
            outcomes.push(outcome);
            counts.push(count as u64);
            percents.push(round_half_even(100.0 * count as f64 / total as f64, 2));
        }
    }

    Ok(DataFrame::new(vec![
        Column::new("Variable".into(), variables),
        Column::new("Outcome".into(), outcomes),
        Column::new("Count".into(), counts),
        Column::new("Percent".into(), percents),
    ])?)
}

pub(crate) fn codebook_impl(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut variables = Vec::with_capacity(columns.len());
    let mut dtypes = Vec::with_capacity(columns.len());
    let mut n = Vec::with_capacity(columns.len());
    let mut missing = Vec::with_capacity(columns.len());
    let mut unique = Vec::with_capacity(columns.len());
    let mut means: Vec<Option<f64>> = Vec::with_capacity(columns.len());
    let mut sds: Vec<Option<f64>> = Vec::with_capacity(columns.len());
    let mut mins: Vec<Option<f64>> = Vec::with_capacity(columns.len());
    let mut maxs: Vec<Option<f64>> = Vec::with_capacity(columns.len());

    for col_name in columns {
        let dtype = lookup(df, col_name)?.dtype().clone();
        let outcomes = column_outcomes(df, col_name)?;
        let observed_count = outcomes.iter().flatten().count();

        variables.push(col_name.to_string());
        dtypes.push(dtype.to_string());
        n.push(observed_count as u64);
        missing.push((outcomes.len() - observed_count) as u64);
        unique.push(frequencies(&outcomes).len() as u64);

        if is_numeric(&dtype) {
            let sample = column_sample(df, col_name)?;
            let summary = describe(&sample);
            means.push(Some(summary.mean));
            sds.push(Some(summary.standard_deviation));
            mins.push(Some(Statistics::min(observed(&sample))));
            maxs.push(Some(Statistics::max(observed(&sample))));
        } else {
            means.push(None);
            sds.push(None);
            mins.push(None);
            maxs.push(None);
        }
    }

    Ok(DataFrame::new(vec![
        Column::new("Variable".into(), variables),
        Column::new("Data Type".into(), dtypes),
        Column::new("N".into(), n),
        Column::new("Missing".into(), missing),
        Column::new("Unique".into(), unique),
        Column::new("Mean".into(), means),
        Column::new("SD".into(), sds),
        Column::new("Min".into(), mins),
        Column::new("Max".into(), maxs),
    ])?)
}
