//! Tests for frequency tables and the codebook

mod common;

use approx::assert_abs_diff_eq;
use common::f64_cell;
use polars::prelude::*;
use research_polars::{Error, ResearchStatsExt};

fn survey_df() -> DataFrame {
    df![
        "answer" => [Some("yes"), Some("no"), Some("yes"), None, Some("maybe"), Some("yes")],
        "rating" => [Some(3i64), Some(1), Some(3), Some(2), None, Some(3)],
        "score" => [Some(1.5), Some(f64::NAN), Some(2.5), Some(3.5), None, Some(4.5)],
    ]
    .unwrap()
}

#[test]
fn test_summary_cat_counts_and_percents() -> anyhow::Result<()> {
    let table = survey_df().summary_cat(&["answer"])?;
    assert_eq!(table.shape(), (3, 4));

    let outcomes = table.column("Outcome")?.str()?;
    let counts = table.column("Count")?.u64()?;
    assert_eq!(outcomes.get(0), Some("yes"));
    assert_eq!(counts.get(0), Some(3));
    // Ties ordered by outcome
    assert_eq!(outcomes.get(1), Some("maybe"));
    assert_eq!(outcomes.get(2), Some("no"));

    assert_eq!(f64_cell(&table, "Percent", 0), 60.0);
    assert_eq!(f64_cell(&table, "Percent", 1), 20.0);
    Ok(())
}

#[test]
fn test_summary_cat_several_columns() -> anyhow::Result<()> {
    let table = survey_df().summary_cat(&["answer", "rating"])?;
    // Three answers plus three ratings
    assert_eq!(table.height(), 6);

    let variables = table.column("Variable")?.str()?;
    assert_eq!(variables.get(3), Some("rating"));
    let outcomes = table.column("Outcome")?.str()?;
    assert_eq!(outcomes.get(3), Some("3"));
    assert_eq!(f64_cell(&table, "Percent", 3), 60.0);
    Ok(())
}

#[test]
fn test_percents_are_rounded() -> anyhow::Result<()> {
    let df = df!["group" => ["a", "b", "b"]]?;
    let table = df.summary_cat(&["group"])?;
    assert_eq!(f64_cell(&table, "Percent", 0), 66.67);
    assert_eq!(f64_cell(&table, "Percent", 1), 33.33);
    Ok(())
}

#[test]
fn test_float_nan_is_missing_outcome() -> anyhow::Result<()> {
    let table = survey_df().summary_cat(&["score"])?;
    assert_eq!(table.height(), 4);
    let total: u64 = table.column("Count")?.u64()?.into_no_null_iter().sum();
    assert_eq!(total, 4);
    Ok(())
}

#[test]
fn test_codebook() -> anyhow::Result<()> {
    let book = survey_df().codebook(&["answer", "rating", "score"])?;
    assert_eq!(book.shape(), (3, 9));

    let n = book.column("N")?.u64()?;
    let missing = book.column("Missing")?.u64()?;
    let unique = book.column("Unique")?.u64()?;
    assert_eq!((n.get(0), missing.get(0), unique.get(0)), (Some(5), Some(1), Some(3)));
    assert_eq!((n.get(1), missing.get(1), unique.get(1)), (Some(5), Some(1), Some(3)));
    assert_eq!((n.get(2), missing.get(2), unique.get(2)), (Some(4), Some(2), Some(4)));

    let means = book.column("Mean")?.f64()?;
    assert_eq!(means.get(0), None);
    assert_abs_diff_eq!(means.get(1).unwrap(), 2.4, epsilon = 1e-12);
    assert_abs_diff_eq!(means.get(2).unwrap(), 3.0, epsilon = 1e-12);

    let mins = book.column("Min")?.f64()?;
    let maxs = book.column("Max")?.f64()?;
    assert_eq!((mins.get(2), maxs.get(2)), (Some(1.5), Some(4.5)));

    let dtypes = book.column("Data Type")?.str()?;
    assert_eq!(dtypes.get(0), Some(DataType::String.to_string().as_str()));
    Ok(())
}

#[test]
fn test_missing_column_error() {
    let result = survey_df().summary_cat(&["nonexistent"]);
    assert!(matches!(result, Err(Error::InvalidColumn(_))));
    let result = survey_df().codebook(&["answer", "nonexistent"]);
    assert!(matches!(result, Err(Error::InvalidColumn(_))));
}
