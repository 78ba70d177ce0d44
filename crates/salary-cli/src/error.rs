use thiserror::Error;

use salary_core::SelectionError;
use salary_model::{Dimension, ModelError};

/// A rejected command-line filter or shell command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("{0}")]
    Visualization(String),
    #[error("invalid row count '{0}'")]
    InvalidNumber(String),
    #[error("{dimension} is both filtered and deselected")]
    ConflictingFilter { dimension: Dimension },
    #[error(transparent)]
    Dimension(#[from] ModelError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
