//! Summary persistence as CSV

use std::path::Path;

use anyhow::{Context, Result};

use crate::summary::ColumnSummary;

use super::SummaryRecord;

/// Write the per-column summary to a CSV file, one record per input column
pub fn write_summary_csv(path: &Path, columns: &[ColumnSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create summary file: {}", path.display()))?;

    for summary in columns {
        writer
            .serialize(SummaryRecord::from(summary))
            .context("Failed to write summary record")?;
    }

    writer.flush().context("Failed to flush summary file")?;
    Ok(())
}
