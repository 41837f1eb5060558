//! Output layer: terminal report and summary persistence

mod csv;
mod terminal;

use serde::Serialize;

use crate::summary::{ColumnSummary, ValueStats};

pub use self::csv::write_summary_csv;
pub use terminal::{render_to_stdout, TerminalReport};

/// Flattened per-column record: one row of the rendered or persisted summary.
///
/// Fields that do not apply to the column's branch (numeric moments of a text
/// column, top value of a numeric column) are `None` and come out blank.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    pub column: String,
    pub dtype: String,
    pub non_null_count: usize,
    pub null_count: usize,
    pub empty_string_count: usize,
    pub null_or_empty_count: usize,
    pub unique: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub top: Option<String>,
    pub top_freq: Option<usize>,
}

impl From<&ColumnSummary> for SummaryRecord {
    fn from(summary: &ColumnSummary) -> Self {
        let mut record = SummaryRecord {
            column: summary.name.clone(),
            dtype: summary.dtype.to_string(),
            non_null_count: summary.non_null_count,
            null_count: summary.null_count,
            empty_string_count: summary.empty_string_count,
            null_or_empty_count: summary.null_or_empty_count,
            unique: summary.unique_count,
            mean: None,
            median: None,
            std: None,
            min: None,
            max: None,
            top: None,
            top_freq: None,
        };

        match &summary.stats {
            ValueStats::Numeric(stats) => {
                record.mean = Some(stats.mean);
                record.median = Some(stats.median);
                record.std = Some(stats.std_dev);
                record.min = Some(stats.min);
                record.max = Some(stats.max);
            }
            ValueStats::Frequency(stats) => {
                record.top = Some(stats.top.clone());
                record.top_freq = Some(stats.top_count);
            }
        }

        record
    }
}
