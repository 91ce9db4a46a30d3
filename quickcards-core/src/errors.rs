use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    Validation(&'static str),
    #[error("not found: {0}")]
    NotFound(String),
}
