//! JSON documents for machine consumers.

use serde_json::Value;

use salary_core::ViewModel;

/// Serializes a view without its row data.
pub fn view_to_json(view: &ViewModel<'_>) -> serde_json::Result<Value> {
    serde_json::to_value(view)
}

/// Pretty-printed form of [`view_to_json`].
pub fn view_to_json_string(view: &ViewModel<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}
