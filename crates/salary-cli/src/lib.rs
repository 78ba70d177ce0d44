//! Library side of the `salary-eda` command-line tool.

pub mod error;
pub mod filters;
pub mod logging;
pub mod shell;
