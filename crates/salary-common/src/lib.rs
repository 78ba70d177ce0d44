//! Shared utilities for the salary EDA crates.
//!
//! This crate provides number parsing and formatting helpers plus
//! Polars `AnyValue` conversions used when rendering data frames.

pub mod format;
pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use format::{
    format_grouped, format_numeric, format_usd, parse_f64, parse_finite_f64, parse_i64,
};
pub use polars::{any_to_f64, any_to_string};
