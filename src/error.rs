use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read module dump: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed module dump: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("object with name {0:?} not found")]
    NotFound(String),
    #[error("object {0:?} has no compiled code to report on")]
    Unsupported(String),
}
