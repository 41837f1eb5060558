//! Most-frequent-value statistics for non-numeric columns

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::CellValue;

/// Most frequent value of a column and its occurrence count
///
/// `("", 0)` when the column has no non-null, non-empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyStats {
    pub top: String,
    pub top_count: usize,
}

/// Find the most frequent trimmed value among the non-null cells.
///
/// Values that trim to the empty string are not candidates. Ties on the
/// maximum count break to the value first encountered in row order, which the
/// insertion-ordered map makes deterministic.
pub fn most_frequent<'a>(cells: impl Iterator<Item = &'a CellValue>) -> FrequencyStats {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for cell in cells {
        if cell.is_null() {
            continue;
        }
        let text = cell.display();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        *counts.entry(text.to_string()).or_insert(0) += 1;
    }

    let mut stats = FrequencyStats::default();
    for (value, &count) in &counts {
        if count > stats.top_count {
            stats.top = value.clone();
            stats.top_count = count;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[CellValue]) -> impl Iterator<Item = &CellValue> {
        values.iter()
    }

    #[test]
    fn test_most_frequent_excludes_empty_strings() {
        let values = vec![
            CellValue::from("a"),
            CellValue::from("a"),
            CellValue::from("b"),
            CellValue::from(""),
        ];
        let stats = most_frequent(cells(&values));
        assert_eq!(stats.top, "a");
        assert_eq!(stats.top_count, 2);
    }

    #[test]
    fn test_tie_breaks_to_first_encountered() {
        let values = vec![
            CellValue::from("b"),
            CellValue::from("a"),
            CellValue::from("a"),
            CellValue::from("b"),
        ];
        let stats = most_frequent(cells(&values));
        assert_eq!(stats.top, "b");
        assert_eq!(stats.top_count, 2);
    }

    #[test]
    fn test_values_are_trimmed_before_counting() {
        let values = vec![CellValue::from(" x "), CellValue::from("x")];
        let stats = most_frequent(cells(&values));
        assert_eq!(stats.top, "x");
        assert_eq!(stats.top_count, 2);
    }

    #[test]
    fn test_no_candidates_reports_empty_and_zero() {
        let values = vec![CellValue::Null, CellValue::from("   "), CellValue::Null];
        let stats = most_frequent(cells(&values));
        assert_eq!(stats.top, "");
        assert_eq!(stats.top_count, 0);
    }

    #[test]
    fn test_non_string_cells_count_by_display_form() {
        let values = vec![
            CellValue::Bool(true),
            CellValue::Bool(true),
            CellValue::Bool(false),
        ];
        let stats = most_frequent(cells(&values));
        assert_eq!(stats.top, "true");
        assert_eq!(stats.top_count, 2);
    }
}
