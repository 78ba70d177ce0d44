//! Tables for filtered rows and filter options.

use comfy_table::{Cell, CellAlignment};
use polars::prelude::{AnyValue, PolarsResult};

use salary_common::{any_to_f64, any_to_string, format_usd};
use salary_ingest::{Dataset, records_to_frame};
use salary_model::{CompanySize, Dimension, EmploymentType, Record};

use crate::style::{TableOptions, align_column, dim_cell, header_cell, label_cell, new_table};

/// Frame columns shown in the row table, with their headers.
const RECORD_COLUMNS: [(&str, &str); 9] = [
    ("work_year", "Year"),
    ("experience_level_label", "Experience"),
    ("employment_type", "Employment"),
    ("job_title", "Job Title"),
    ("salary_in_usd", "Salary (USD)"),
    ("job_type_label", "Job Type"),
    ("company_size", "Company Size"),
    ("country", "Country"),
    ("region", "Region"),
];

/// Renders the first `limit` records as a table, followed by a row count line.
pub fn render_records_table(
    records: &[&Record],
    limit: usize,
    options: TableOptions,
) -> PolarsResult<String> {
    let shown = limit.min(records.len());
    let frame = records_to_frame(records[..shown].iter().copied())?;
    let mut table = new_table(options);
    table.set_header(
        RECORD_COLUMNS
            .iter()
            .map(|(_, header)| header_cell(header))
            .collect::<Vec<_>>(),
    );
    for row in 0..frame.height() {
        let mut cells = Vec::with_capacity(RECORD_COLUMNS.len());
        for (name, _) in RECORD_COLUMNS {
            let value = frame.column(name)?.get(row)?;
            cells.push(value_cell(name, value));
        }
        table.add_row(cells);
    }
    align_column(&mut table, 4, CellAlignment::Right);
    Ok(format!(
        "{table}\nShowing {shown} of {} filtered records",
        records.len()
    ))
}

fn value_cell(column: &str, value: AnyValue<'_>) -> Cell {
    if matches!(value, AnyValue::Null) {
        return dim_cell("-");
    }
    if column == "salary_in_usd"
        && let Some(amount) = any_to_f64(value.clone())
    {
        return Cell::new(format_usd(amount));
    }
    let text = any_to_string(value);
    let label = match column {
        "employment_type" => EmploymentType::label_for_code(&text),
        "company_size" => CompanySize::label_for_code(&text),
        _ => None,
    };
    Cell::new(label.map_or(text, str::to_string))
}

/// Renders every filter dimension with its options.
pub fn render_options_table(dataset: &Dataset, options: TableOptions) -> String {
    let mut table = new_table(options);
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("Column"),
        header_cell("Options"),
        header_cell("Values"),
    ]);
    for dimension in Dimension::ALL {
        let values = dataset.options(dimension);
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            label_cell(dimension.label()),
            dim_cell(dimension.column()),
            Cell::new(values.len()),
            Cell::new(joined),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    format!("{table}\n{} records loaded", dataset.len())
}
