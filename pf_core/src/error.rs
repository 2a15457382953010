use serde_json;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),
}
