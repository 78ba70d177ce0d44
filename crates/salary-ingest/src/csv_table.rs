//! Header-checked CSV reading shared by the salary and region loaders.

use std::collections::HashMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;

/// Collapses inner whitespace and strips a UTF-8 BOM from a header cell.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Opens a CSV file with a header row and returns the reader plus normalized headers.
pub fn open_csv(path: &Path) -> Result<(Reader<File>, Vec<String>), LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();
    Ok((reader, headers))
}

/// Positions of the required columns inside a header row.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    path: PathBuf,
    positions: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Resolves every required column, failing with the full list of missing names.
    pub fn resolve(
        path: &Path,
        headers: &[String],
        required: &[&'static str],
    ) -> Result<Self, LoadError> {
        let mut positions = HashMap::with_capacity(required.len());
        let mut missing = Vec::new();
        for column in required {
            match headers.iter().position(|header| header == column) {
                Some(idx) => {
                    positions.insert(*column, idx);
                }
                None => missing.push((*column).to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(LoadError::Schema {
                path: path.to_path_buf(),
                missing,
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            positions,
        })
    }

    /// Cell for a resolved column; short rows yield an empty string.
    pub fn cell<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|idx| record.get(*idx))
            .unwrap_or("")
    }

    /// Parses a cell, mapping failures to a [`LoadError::Parse`] with the row's line.
    pub fn parse_cell<T>(
        &self,
        record: &StringRecord,
        column: &str,
        parse: impl FnOnce(&str) -> Option<T>,
        expected: &str,
    ) -> Result<T, LoadError> {
        let raw = self.cell(record, column);
        parse(raw).ok_or_else(|| LoadError::Parse {
            path: self.path.clone(),
            line: record_line(record),
            column: column.to_string(),
            message: format!("expected {expected}, found {raw:?}"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 1-based line of a record, or 0 when the reader did not track it.
pub(crate) fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|position| position.line()).unwrap_or(0)
}

pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_bom_and_whitespace() {
        assert_eq!(normalize_header("\u{feff}work_year"), "work_year");
        assert_eq!(normalize_header("  job   title "), "job title");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn resolve_reports_all_missing_columns() {
        let headers = vec!["a".to_string(), "c".to_string()];
        let err = ColumnIndex::resolve(Path::new("t.csv"), &headers, &["a", "b", "d"])
            .expect_err("missing columns");
        match err {
            LoadError::Schema { missing, .. } => assert_eq!(missing, vec!["b", "d"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cell_tolerates_short_rows() {
        let headers = vec!["a".to_string(), "b".to_string()];
        let index = ColumnIndex::resolve(Path::new("t.csv"), &headers, &["a", "b"])
            .expect("resolve columns");
        let record = StringRecord::from(vec!["1"]);
        assert_eq!(index.cell(&record, "a"), "1");
        assert_eq!(index.cell(&record, "b"), "");
    }
}
