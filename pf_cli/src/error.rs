use std::path::PathBuf;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error(transparent)]
    Core(#[from] pf_core::error::ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to server at {0} — is it running?")]
    ConnectionRefused(String),

    #[error("Server answered {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Could not read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
