//! Tables for rendered views.

use comfy_table::{Cell, CellAlignment};

use salary_common::format_usd;
use salary_core::{Chart, ChartData, ViewModel, ViewState};

use crate::style::{
    TableOptions, align_column, count_cell, dim_cell, header_cell, label_cell, new_table,
};

/// One-line summary, e.g. `Continents: 120 of 3755 records`.
pub fn status_line(view: &ViewModel<'_>) -> String {
    format!(
        "{}: {} of {} records",
        view.visualization, view.filtered_records, view.total_records
    )
}

/// Message shown instead of charts, or `None` when charts are available.
pub fn state_message(view: &ViewModel<'_>) -> Option<String> {
    match &view.state {
        ViewState::AwaitingSelection { dimensions } => {
            let names: Vec<&str> = dimensions.iter().map(|dimension| dimension.label()).collect();
            Some(format!("Select at least one value for: {}", names.join(", ")))
        }
        ViewState::NoResults => Some("No records match the current filters.".to_string()),
        ViewState::Ready { .. } => None,
    }
}

/// Renders the status line followed by one table per chart.
pub fn render_view_table(view: &ViewModel<'_>, options: TableOptions) -> String {
    let mut sections = vec![status_line(view)];
    match state_message(view) {
        Some(message) => sections.push(message),
        None => {
            for chart in view.charts() {
                sections.push(render_chart_table(chart, view.filtered_records, options));
            }
        }
    }
    sections.join("\n\n")
}

/// Renders one chart as a titled table.
///
/// `total` is the size of the filtered set; count charts show each entry's
/// share of it.
pub fn render_chart_table(chart: &Chart, total: usize, options: TableOptions) -> String {
    if chart.data.is_empty() {
        return format!("{}\n(no data)", chart.title);
    }
    let mut table = new_table(options);
    match &chart.data {
        ChartData::Values(points) => {
            table.set_header(vec![
                header_cell("#"),
                header_cell(&chart.category_axis),
                header_cell(&chart.value_axis),
            ]);
            for (idx, point) in points.iter().enumerate() {
                table.add_row(vec![
                    dim_cell(idx + 1),
                    label_cell(&point.label),
                    Cell::new(format_usd(point.value)),
                ]);
            }
            align_column(&mut table, 0, CellAlignment::Right);
            align_column(&mut table, 2, CellAlignment::Right);
        }
        ChartData::Counts(points) => {
            table.set_header(vec![
                header_cell("#"),
                header_cell(&chart.category_axis),
                header_cell(&chart.value_axis),
                header_cell("Share"),
            ]);
            for (idx, point) in points.iter().enumerate() {
                table.add_row(vec![
                    dim_cell(idx + 1),
                    label_cell(&point.label),
                    count_cell(point.count),
                    Cell::new(share(point.count, total)),
                ]);
            }
            align_column(&mut table, 0, CellAlignment::Right);
            align_column(&mut table, 2, CellAlignment::Right);
            align_column(&mut table, 3, CellAlignment::Right);
        }
        ChartData::Boxes(boxes) => {
            let mut header = vec![header_cell(&chart.category_axis), header_cell("Count")];
            header.extend(
                ["Min", "Q1", "Median", "Q3", "Max", "Mean"]
                    .into_iter()
                    .map(header_cell),
            );
            table.set_header(header);
            for summary in boxes {
                let mut row = vec![label_cell(&summary.label), count_cell(summary.count)];
                row.extend(
                    [
                        summary.min,
                        summary.q1,
                        summary.median,
                        summary.q3,
                        summary.max,
                        summary.mean,
                    ]
                    .into_iter()
                    .map(|value| Cell::new(format_usd(value))),
                );
                table.add_row(row);
            }
            for index in 1..8 {
                align_column(&mut table, index, CellAlignment::Right);
            }
        }
    }
    format!("{}\n{table}", chart.title)
}

fn share(count: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}
