//! Tests for data frame construction and CSV export.

use std::fs;

use polars::prelude::AnyValue;
use salary_common::{any_to_f64, any_to_string};
use salary_ingest::{FRAME_COLUMNS, records_to_frame, write_frame_csv};
use salary_model::Record;

fn sample() -> Vec<Record> {
    vec![
        Record {
            work_year: 2023,
            experience_level: "SE".to_string(),
            job_title: "Data Scientist".to_string(),
            salary_in_usd: 120000.0,
            company_location: "US".to_string(),
            job_type_label: Some("Remote"),
            country: Some("United States of America".to_string()),
            region: Some("Americas".to_string()),
            ..Record::default()
        },
        Record {
            work_year: 2022,
            experience_level: "EN".to_string(),
            job_title: "Data Analyst".to_string(),
            salary_in_usd: 50000.5,
            company_location: "ZZ".to_string(),
            ..Record::default()
        },
    ]
}

#[test]
fn builds_frame_with_all_columns() {
    let records = sample();
    let frame = records_to_frame(&records).expect("build frame");

    assert_eq!(frame.height(), 2);
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, FRAME_COLUMNS.to_vec());
}

#[test]
fn frame_keeps_nulls_for_unmatched_regions() {
    let records = sample();
    let frame = records_to_frame(&records).expect("build frame");

    let region = frame.column("region").expect("region column");
    assert_eq!(region.null_count(), 1);
    assert_eq!(
        any_to_string(region.get(0).unwrap_or(AnyValue::Null)),
        "Americas"
    );
    assert_eq!(any_to_string(region.get(1).unwrap_or(AnyValue::Null)), "");

    let usd = frame.column("salary_in_usd").expect("usd column");
    assert_eq!(any_to_f64(usd.get(1).unwrap_or(AnyValue::Null)), Some(50000.5));
}

#[test]
fn empty_input_builds_empty_frame() {
    let records: Vec<Record> = Vec::new();
    let frame = records_to_frame(&records).expect("build frame");
    assert_eq!(frame.height(), 0);
    assert_eq!(frame.width(), FRAME_COLUMNS.len());
}

#[test]
fn exports_csv_with_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("filtered.csv");
    let records = sample();
    let mut frame = records_to_frame(&records).expect("build frame");

    write_frame_csv(&mut frame, &path).expect("write csv");

    let contents = fs::read_to_string(&path).expect("read export");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(FRAME_COLUMNS.join(",").as_str()));
    assert_eq!(lines.count(), 2);
}
