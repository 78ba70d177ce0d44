//! Reading the primary salaries table.

use std::path::Path;

use tracing::debug;

use salary_common::{parse_finite_f64, parse_i64};
use salary_model::Record;

use crate::csv_table::{ColumnIndex, is_blank, open_csv};
use crate::error::LoadError;

/// Columns the salaries table must provide. Extra columns are ignored.
pub const SALARY_COLUMNS: [&str; 11] = [
    "work_year",
    "experience_level",
    "employment_type",
    "job_title",
    "salary",
    "salary_currency",
    "salary_in_usd",
    "employee_residence",
    "remote_ratio",
    "company_location",
    "company_size",
];

/// Reads every row of the salaries table into a [`Record`].
///
/// Derived columns are left empty; [`crate::Dataset::from_parts`] fills them.
pub fn read_salaries(path: &Path) -> Result<Vec<Record>, LoadError> {
    let (mut reader, headers) = open_csv(path)?;
    let columns = ColumnIndex::resolve(path, &headers, &SALARY_COLUMNS)?;
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if is_blank(&row) {
            continue;
        }
        let text = |column: &str| columns.cell(&row, column).to_string();
        records.push(Record {
            work_year: columns.parse_cell(&row, "work_year", parse_i64, "an integer year")?,
            experience_level: text("experience_level"),
            employment_type: text("employment_type"),
            job_title: text("job_title"),
            salary: columns.parse_cell(&row, "salary", parse_finite_f64, "a finite number")?,
            salary_currency: text("salary_currency"),
            salary_in_usd: columns.parse_cell(
                &row,
                "salary_in_usd",
                parse_finite_f64,
                "a finite number",
            )?,
            employee_residence: text("employee_residence"),
            remote_ratio: columns.parse_cell(&row, "remote_ratio", parse_i64, "an integer")?,
            company_location: text("company_location"),
            company_size: text("company_size"),
            ..Record::default()
        });
    }
    debug!(path = %path.display(), rows = records.len(), "read salaries table");
    Ok(records)
}
