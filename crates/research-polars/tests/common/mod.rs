//! Common test utilities for research-polars tests

use polars::prelude::*;

/// Two groups with known t-test statistics
pub fn groups_df() -> DataFrame {
    df![
        "control" => [1.0, 2.0, 3.0, 4.0, 5.0],
        "treatment" => [2.0, 4.0, 6.0, 8.0, 10.0],
    ]
    .unwrap()
}

/// Extract a single f64 cell
pub fn f64_cell(df: &DataFrame, col_name: &str, row: usize) -> f64 {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .get(row)
        .unwrap()
}

/// Look up a statistic in a results table by its label
pub fn statistic(results: &DataFrame, label: &str) -> f64 {
    let labels = results.column("Statistic").unwrap().str().unwrap();
    let row = labels
        .iter()
        .position(|l| l == Some(label))
        .unwrap_or_else(|| panic!("no statistic labelled {label}"));
    f64_cell(results, "Value", row)
}
