//! Summary table of continuous variables

use super::column_sample;
use crate::{Result, SummaryOptions};
use polars::prelude::*;
use research_confidence::ConfidenceLevel;
use research_ttest::GroupDescriptives;
use tracing::debug;

/// Render descriptives rows as a table
///
/// Columns are `Variable`, `N`, `Mean`, `SD`, `SE` and the interval bounds
/// named after `confidence_level`, e.g. `95% Conf. Lower`.
pub fn descriptives_frame(rows: &[GroupDescriptives], confidence_level: f64) -> Result<DataFrame> {
    let level = ConfidenceLevel::new(confidence_level)?;

    let labels: Vec<String> = rows.iter().map(|r| r.label.clone()).collect();
    let n: Vec<u64> = rows.iter().map(|r| r.n as u64).collect();
    let means: Vec<f64> = rows.iter().map(|r| r.mean).collect();
    let sds: Vec<f64> = rows.iter().map(|r| r.sd).collect();
    let ses: Vec<f64> = rows.iter().map(|r| r.se).collect();
    let lowers: Vec<f64> = rows.iter().map(|r| r.ci_lower).collect();
    let uppers: Vec<f64> = rows.iter().map(|r| r.ci_upper).collect();

    Ok(DataFrame::new(vec![
        Column::new("Variable".into(), labels),
        Column::new("N".into(), n),
        Column::new("Mean".into(), means),
        Column::new("SD".into(), sds),
        Column::new("SE".into(), ses),
        Column::new(format!("{} Conf. Lower", level).into(), lowers),
        Column::new(format!("{} Conf. Upper", level).into(), uppers),
    ])?)
}

pub(crate) fn summary_cont_impl(
    df: &DataFrame,
    columns: &[&str],
    options: &SummaryOptions,
) -> Result<DataFrame> {
    let ci_options = options.ci_options();
    let mut rows = Vec::with_capacity(columns.len());

    for col_name in columns {
        let sample = column_sample(df, col_name)?;
        debug!(column = *col_name, len = sample.len(), "summarizing column");
        rows.push(GroupDescriptives::from_sample(*col_name, &sample, &ci_options)?);
    }

    descriptives_frame(&rows, options.confidence_level)
}
