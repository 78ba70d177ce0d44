use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
