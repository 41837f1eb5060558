//! Summary engine: per-column records and file-level metadata

mod frequency;
mod numeric;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::model::{CellClass, CellType, Table};

pub use frequency::{most_frequent, FrequencyStats};
pub use numeric::{describe, NumericStats};

/// Type-dependent half of a column summary
#[derive(Debug, Clone, PartialEq)]
pub enum ValueStats {
    /// Numeric columns get moment statistics
    Numeric(NumericStats),
    /// Everything else gets most-frequent-value statistics
    Frequency(FrequencyStats),
}

/// Summary of a single column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name (from header)
    pub name: String,
    /// Inferred column type
    pub dtype: CellType,
    /// Cells that are not null
    pub non_null_count: usize,
    /// Cells that are null
    pub null_count: usize,
    /// Non-null cells whose string form trims to zero length
    pub empty_string_count: usize,
    /// Null cells plus empty-string cells (the classes are disjoint)
    pub null_or_empty_count: usize,
    /// Distinct non-null values
    pub unique_count: usize,
    pub stats: ValueStats,
}

/// File-level metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileMeta {
    pub total_rows: usize,
    pub total_columns: usize,
    pub rows_with_any_null_or_empty: usize,
    pub rows_with_all_null_or_empty: usize,
}

/// Result of summarizing a table
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// One summary per column, in table order
    pub columns: Vec<ColumnSummary>,
    pub meta: FileMeta,
}

/// Compute per-column summaries and file metadata for a table.
///
/// Pure function of its input: no mutation, no I/O, no failure modes. An
/// empty table yields an empty column sequence and zero-valued metadata.
pub fn summarize(table: &Table) -> SummaryReport {
    let mut rows_any = 0;
    let mut rows_all = 0;
    for row in &table.rows {
        let mut any = false;
        let mut all = !row.is_empty();
        for cell in row {
            if cell.is_null_or_empty() {
                any = true;
            } else {
                all = false;
            }
        }
        if any {
            rows_any += 1;
        }
        if all {
            rows_all += 1;
        }
    }

    let meta = FileMeta {
        total_rows: table.row_count(),
        total_columns: table.column_count(),
        rows_with_any_null_or_empty: rows_any,
        rows_with_all_null_or_empty: rows_all,
    };

    let columns = table
        .columns
        .iter()
        .map(|col| summarize_column(table, col.index))
        .collect();

    SummaryReport { columns, meta }
}

fn summarize_column(table: &Table, col_idx: usize) -> ColumnSummary {
    let col = &table.columns[col_idx];

    let mut null_count = 0;
    let mut empty_count = 0;
    for cell in table.column_values(col_idx) {
        match cell.classify() {
            CellClass::Null => null_count += 1,
            CellClass::Empty => empty_count += 1,
            CellClass::Present => {}
        }
    }

    let stats = if col.inferred_type.is_numeric() {
        let values: Vec<f64> = table
            .column_values(col_idx)
            .filter_map(|cell| cell.as_f64())
            .collect();
        ValueStats::Numeric(describe(values))
    } else {
        ValueStats::Frequency(most_frequent(table.column_values(col_idx)))
    };

    ColumnSummary {
        name: col.name.clone(),
        dtype: col.inferred_type,
        non_null_count: table.row_count() - null_count,
        null_count,
        empty_string_count: empty_count,
        null_or_empty_count: null_count + empty_count,
        unique_count: unique_count(table, col_idx, col.inferred_type.is_numeric()),
        stats,
    }
}

/// Count distinct non-null values of a column.
///
/// Numeric columns are counted on their `f64` form so `1` and `1.0` collapse;
/// other columns are counted on display strings.
fn unique_count(table: &Table, col_idx: usize, numeric: bool) -> usize {
    if numeric {
        let bits: FxHashSet<u64> = table
            .column_values(col_idx)
            .filter_map(|cell| cell.as_f64())
            .map(f64::to_bits)
            .collect();
        bits.len()
    } else {
        let values: FxHashSet<String> = table
            .column_values(col_idx)
            .filter(|cell| !cell.is_null())
            .map(|cell| cell.display().into_owned())
            .collect();
        values.len()
    }
}
