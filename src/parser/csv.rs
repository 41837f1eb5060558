//! CSV file loader

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::model::{CellType, CellValue, Column, Table};

/// Load a CSV file into a typed table
pub fn parse(path: &Path, config: &Config) -> Result<Table> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Read headers
    let headers = csv_reader
        .headers()
        .context("Failed to read CSV headers")?
        .clone();

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.to_string(), i))
        .collect();

    let mut table = Table::new(columns);

    // Read rows, stopping at the configured limit
    for (row_num, result) in csv_reader.records().enumerate() {
        if let Some(limit) = config.nrows {
            if row_num >= limit {
                break;
            }
        }

        let record =
            result.with_context(|| format!("Failed to read CSV row {}", row_num + 2))?; // +2 for 1-indexing and header

        let cells: Vec<CellValue> = record.iter().map(parse_cell_value).collect();
        table.add_row(cells);
    }

    infer_column_types(&mut table);

    Ok(table)
}

/// Markers that denote a missing value rather than text
fn is_null_marker(trimmed: &str) -> bool {
    trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("nan")
}

/// Parse a string value into a CellValue with type inference
///
/// An empty raw field is null; a whitespace-only field is kept as a string so
/// the summary can count it as empty rather than missing.
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    if s.is_empty() || is_null_marker(trimmed) {
        return CellValue::Null;
    }

    if trimmed.is_empty() {
        return CellValue::String(Cow::Owned(s.to_string()));
    }

    // Try parsing as boolean
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }

    // Try parsing as integer
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    // Try parsing as float
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    // Try parsing as date
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // Try parsing as datetime (ISO 8601)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    // Default to string
    CellValue::String(Cow::Owned(trimmed.to_string()))
}

/// Infer column types from data
fn infer_column_types(table: &mut Table) {
    for col_idx in 0..table.column_count() {
        let mut inferred = CellType::Null;

        for row in &table.rows {
            let cell_type = match &row[col_idx] {
                CellValue::Null => CellType::Null,
                CellValue::Bool(_) => CellType::Bool,
                CellValue::Int(_) => CellType::Int,
                CellValue::Float(_) => CellType::Float,
                CellValue::String(_) => CellType::String,
                CellValue::Date(_) => CellType::Date,
                CellValue::DateTime(_) => CellType::DateTime,
            };

            inferred = inferred.widen(cell_type);
        }

        if let Some(col) = table.columns.get_mut(col_idx) {
            col.inferred_type = inferred;
        }
    }
}
