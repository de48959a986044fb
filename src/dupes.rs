use crate::{error::CheckError, table::Table};
use std::collections::HashMap;
use tracing::debug;

/// Column the question bank keys on.
pub const DEFAULT_KEY_COLUMN: &str = "question_id";

/// Find every row whose `key_column` value occurs more than once in the
/// table. Every occurrence is flagged, not just the second and later ones,
/// and the returned indices keep the original file order.
///
/// Rows with an empty key cell are excluded from duplicate detection
/// entirely: two rows both missing an ID are not duplicates of each other.
pub fn find_duplicates(table: &Table, key_column: &str) -> Result<Vec<usize>, CheckError> {
    let key_idx = table
        .column_index(key_column)
        .ok_or_else(|| CheckError::MissingColumn {
            column: key_column.to_string(),
        })?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in &table.rows {
        let value = row[key_idx].as_str();
        if value.is_empty() {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let dupes: Vec<usize> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let value = row[key_idx].as_str();
            !value.is_empty() && counts[value] >= 2
        })
        .map(|(idx, _)| idx)
        .collect();

    debug!(
        flagged = dupes.len(),
        total = table.rows.len(),
        key = key_column,
        "duplicate scan complete"
    );

    Ok(dupes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn unique_ids_yield_nothing() -> Result<()> {
        let t = table(
            &["question_id", "text"],
            &[&["Q1", "a"], &["Q2", "b"], &["Q3", "c"]],
        );
        assert!(find_duplicates(&t, DEFAULT_KEY_COLUMN)?.is_empty());
        Ok(())
    }

    #[test]
    fn every_occurrence_is_flagged() -> Result<()> {
        let t = table(
            &["question_id", "text"],
            &[&["Q1", "a"], &["Q2", "b"], &["Q1", "c"], &["Q1", "d"]],
        );
        // all three Q1 rows, not just the repeats
        assert_eq!(find_duplicates(&t, DEFAULT_KEY_COLUMN)?, vec![0, 2, 3]);
        Ok(())
    }

    #[test]
    fn multiple_groups_keep_file_order() -> Result<()> {
        let t = table(
            &["question_id", "text"],
            &[
                &["Q1", "a"],
                &["Q2", "b"],
                &["Q2", "c"],
                &["Q3", "d"],
                &["Q1", "e"],
            ],
        );
        assert_eq!(find_duplicates(&t, DEFAULT_KEY_COLUMN)?, vec![0, 1, 2, 4]);
        Ok(())
    }

    #[test]
    fn empty_table_yields_nothing() -> Result<()> {
        let t = table(&["question_id", "text"], &[]);
        assert!(find_duplicates(&t, DEFAULT_KEY_COLUMN)?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_key_column_errors() {
        let t = table(&["id", "text"], &[&["Q1", "a"]]);
        let err = find_duplicates(&t, DEFAULT_KEY_COLUMN).unwrap_err();
        match err {
            CheckError::MissingColumn { ref column } => assert_eq!(column, "question_id"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn empty_key_cells_are_never_duplicates() -> Result<()> {
        let t = table(
            &["question_id", "text"],
            &[&["", "a"], &["", "b"], &["Q1", "c"], &["Q1", "d"]],
        );
        assert_eq!(find_duplicates(&t, DEFAULT_KEY_COLUMN)?, vec![2, 3]);
        Ok(())
    }

    #[test]
    fn key_column_does_not_need_to_be_first() -> Result<()> {
        let t = table(
            &["text", "question_id"],
            &[&["a", "Q7"], &["b", "Q8"], &["c", "Q7"]],
        );
        assert_eq!(find_duplicates(&t, DEFAULT_KEY_COLUMN)?, vec![0, 2]);
        Ok(())
    }
}
