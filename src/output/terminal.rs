//! Terminal report rendering

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::summary::SummaryReport;

use super::SummaryRecord;

/// Renders a summary report for a terminal
pub struct TerminalReport {
    color_choice: ColorChoice,
}

impl TerminalReport {
    pub fn new() -> Self {
        Self {
            color_choice: ColorChoice::Auto,
        }
    }

    pub fn with_color_choice(color_choice: ColorChoice) -> Self {
        Self { color_choice }
    }

    /// Render the full report to stdout
    pub fn print(&self, report: &SummaryReport, path: &Path) -> Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.render(report, path, &mut stdout)
    }

    /// Render the report to any color-capable writer
    pub fn render(
        &self,
        report: &SummaryReport,
        path: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_banner(path, writer)?;

        self.write_heading("File summary", writer)?;
        writeln!(writer, "Total rows: {}", report.meta.total_rows)?;
        writeln!(writer, "Total columns: {}", report.meta.total_columns)?;
        writeln!(
            writer,
            "Rows with ANY null/empty: {}",
            report.meta.rows_with_any_null_or_empty
        )?;
        writeln!(
            writer,
            "Rows with ALL null/empty: {}",
            report.meta.rows_with_all_null_or_empty
        )?;
        writeln!(writer)?;

        self.write_heading("Per-column summary", writer)?;
        if report.columns.is_empty() {
            writeln!(writer, "(no columns)")?;
        } else {
            writeln!(writer, "{}", build_summary_table(report))?;
        }

        Ok(())
    }

    fn write_banner(&self, path: &Path, writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(
            writer,
            "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
        )?;
        writeln!(writer, " datasum: {}", path.display())?;
        writeln!(
            writer,
            "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
        )?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_heading(&self, text: &str, writer: &mut dyn WriteColor) -> Result<()> {
        writer.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Cyan)))?;
        writeln!(writer, "=== {} ===", text)?;
        writer.reset()?;
        Ok(())
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the report to stdout with automatic color detection
pub fn render_to_stdout(report: &SummaryReport, path: &Path) -> Result<()> {
    TerminalReport::new().print(report, path)
}

/// Build the per-column summary table, one row per input column
fn build_summary_table(report: &SummaryReport) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "column",
        "dtype",
        "non_null",
        "null",
        "empty",
        "null_or_empty",
        "unique",
        "mean",
        "median",
        "std",
        "min",
        "max",
        "top",
        "top_freq",
    ]);

    for summary in &report.columns {
        let record = SummaryRecord::from(summary);
        builder.push_record([
            record.column,
            record.dtype,
            record.non_null_count.to_string(),
            record.null_count.to_string(),
            record.empty_string_count.to_string(),
            record.null_or_empty_count.to_string(),
            record.unique.to_string(),
            fmt_opt_float(record.mean),
            fmt_opt_float(record.median),
            fmt_opt_float(record.std),
            fmt_opt_float(record.min),
            fmt_opt_float(record.max),
            record.top.unwrap_or_default(),
            record.top_freq.map(|c| c.to_string()).unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

fn fmt_opt_float(value: Option<f64>) -> String {
    value.map(fmt_float).unwrap_or_default()
}

/// Fixed-precision float with trailing zeros trimmed
fn fmt_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}
