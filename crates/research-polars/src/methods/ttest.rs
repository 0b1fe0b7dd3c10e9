//! t-test tables

use super::{column_sample, descriptives_frame};
use crate::Result;
use polars::prelude::*;
use research_confidence::ConfidenceLevel;
use research_ttest::{ttest, TTestKind, TTestOptions, TTestReport};

/// Render the statistics of a t-test as a two-column table
///
/// Columns are `Statistic` and `Value`. The difference row is labelled
/// with the first two descriptives rows.
pub fn results_frame(report: &TTestReport) -> Result<DataFrame> {
    let result = &report.result;
    let label = |i: usize| {
        report
            .descriptives
            .get(i)
            .map_or("?", |row| row.label.as_str())
    };
    let difference = match result.kind {
        TTestKind::Paired => format!("Mean difference ({} - {})", label(0), label(1)),
        _ => format!("Difference ({} - {})", label(0), label(1)),
    };
    let level = ConfidenceLevel::new(result.difference_ci.confidence_level)?;
    let effects = &result.effect_sizes;

    let rows: Vec<(String, f64)> = vec![
        (difference, result.difference),
        ("Standard error".to_string(), result.standard_error),
        ("Degrees of freedom".to_string(), result.degrees_of_freedom),
        ("t".to_string(), result.t),
        ("Two side test p value".to_string(), result.p_two_sided),
        ("Difference < 0 p value".to_string(), result.p_difference_less),
        ("Difference > 0 p value".to_string(), result.p_difference_greater),
        (format!("{} Conf. Lower", level), result.difference_ci.lower),
        (format!("{} Conf. Upper", level), result.difference_ci.upper),
        ("Cohen's d".to_string(), effects.cohen_d),
        ("Hedges' g".to_string(), effects.hedges_g),
        ("Glass's delta1".to_string(), effects.glass_delta1),
        ("Glass's delta2".to_string(), effects.glass_delta2),
        ("Point-biserial r".to_string(), effects.point_biserial_r),
    ];
    let (statistics, values): (Vec<String>, Vec<f64>) = rows.into_iter().unzip();

    Ok(DataFrame::new(vec![
        Column::new("Statistic".into(), statistics),
        Column::new("Value".into(), values),
    ])?)
}

pub(crate) fn ttest_columns_impl(
    df: &DataFrame,
    column1: &str,
    column2: &str,
    options: &TTestOptions,
) -> Result<(DataFrame, DataFrame)> {
    let group1 = column_sample(df, column1)?;
    let group2 = column_sample(df, column2)?;
    let options = options.clone().with_labels(column1, column2);

    let report = ttest(&group1, &group2, &options)?;
    let descriptives = descriptives_frame(&report.descriptives, options.confidence_level)?;
    let results = results_frame(&report)?;
    Ok((descriptives, results))
}
