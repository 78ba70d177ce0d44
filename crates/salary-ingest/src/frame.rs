//! Polars frame construction for tabular display and CSV export.

use std::fs::File;
use std::path::Path;

use polars::prelude::{Column, CsvWriter, DataFrame, NamedFrom, PolarsResult, SerWriter, Series};
use tracing::info;

use salary_model::Record;

use crate::error::ExportError;

/// Column order of [`records_to_frame`]: the source columns, then the derived ones.
pub const FRAME_COLUMNS: [&str; 15] = [
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
    "job_type_label",
    "experience_level_label",
    "country",
    "region",
];

/// Builds a data frame from records, keeping nulls for missing derived values.
pub fn records_to_frame<'a, I>(records: I) -> PolarsResult<DataFrame>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    let text = |name: &str, get: fn(&Record) -> &str| -> Column {
        let values: Vec<&str> = records.iter().map(|record| get(record)).collect();
        Series::new(name.into(), values).into()
    };
    let optional = |name: &str, get: fn(&Record) -> Option<&str>| -> Column {
        let values: Vec<Option<&str>> = records.iter().map(|record| get(record)).collect();
        Series::new(name.into(), values).into()
    };
    let integer = |name: &str, get: fn(&Record) -> i64| -> Column {
        let values: Vec<i64> = records.iter().map(|record| get(record)).collect();
        Series::new(name.into(), values).into()
    };
    let float = |name: &str, get: fn(&Record) -> f64| -> Column {
        let values: Vec<f64> = records.iter().map(|record| get(record)).collect();
        Series::new(name.into(), values).into()
    };
    let columns = vec![
        integer("work_year", |r| r.work_year),
        text("experience_level", |r| &r.experience_level),
        text("employment_type", |r| &r.employment_type),
        text("job_title", |r| &r.job_title),
        float("salary", |r| r.salary),
        text("salary_currency", |r| &r.salary_currency),
        float("salary_in_usd", |r| r.salary_in_usd),
        text("employee_residence", |r| &r.employee_residence),
        integer("remote_ratio", |r| r.remote_ratio),
        text("company_location", |r| &r.company_location),
        text("company_size", |r| &r.company_size),
        optional("job_type_label", |r| r.job_type_label),
        optional("experience_level_label", |r| r.experience_level_label),
        optional("country", |r| r.country.as_deref()),
        optional("region", |r| r.region.as_deref()),
    ];
    DataFrame::new(columns)
}

/// Writes a frame to `path` as CSV with a header row.
pub fn write_frame_csv(frame: &mut DataFrame, path: &Path) -> Result<(), ExportError> {
    let mut file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)?;
    info!(path = %path.display(), rows = frame.height(), "exported rows");
    Ok(())
}
