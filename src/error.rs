use thiserror::Error;

#[derive(Error, Debug)]
pub enum OkraError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Task not found: #{0}")]
    NotFound(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OkraError>;
