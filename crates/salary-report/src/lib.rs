//! Presentation adapter for salary views.
//!
//! Turns [`salary_core::ViewModel`]s, record sets and filter options into
//! terminal tables (comfy-table) or JSON documents.

mod json;
mod records;
mod style;
mod view;

pub use json::{view_to_json, view_to_json_string};
pub use records::{render_options_table, render_records_table};
pub use style::TableOptions;
pub use view::{render_chart_table, render_view_table, state_message, status_line};
