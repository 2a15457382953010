use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ErrorBackend>;
pub type ResultAPI<T = Value> = std::result::Result<Json<T>, ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error("OPENAI_API_KEY env var is required")]
    MissingApiKey,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("LLM provider request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("LLM provider did not answer within {0:?}")]
    UpstreamTimeout(Duration),

    #[error("LLM provider returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("LLM provider returned no completion")]
    EmptyCompletion,

    #[error("LLM provider returned an unreadable body: {0}")]
    UpstreamBody(#[from] serde_json::Error),

    #[error("Field required: {0}")]
    MissingField(&'static str),

    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),
}

impl ErrorBackend {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::InvalidCorsOrigin(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::Upstream(_) => StatusCode::BAD_GATEWAY,
            ErrorBackend::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ErrorBackend::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            ErrorBackend::EmptyCompletion => StatusCode::BAD_GATEWAY,
            ErrorBackend::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
            ErrorBackend::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorBackend::Multipart(e) => e.status(),
            ErrorBackend::IO(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to callers. Provider bodies and I/O details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            ErrorBackend::MissingApiKey => "LLM provider is not configured".to_string(),
            ErrorBackend::Upstream(_)
            | ErrorBackend::UpstreamStatus { .. }
            | ErrorBackend::EmptyCompletion
            | ErrorBackend::UpstreamBody(_) => "LLM provider request failed".to_string(),
            ErrorBackend::UpstreamTimeout(_) => self.to_string(),
            _ if self.status().is_client_error() => self.to_string(),
            _ => "An unexpected error occurred".to_string(),
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!("ErrorBackend occurred: {}", self);
        }

        let body = Json(json!({
            "error": self.public_message(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_and_upstream_errors_are_server_errors() {
        assert!(ErrorBackend::MissingApiKey.status().is_server_error());
        assert!(ErrorBackend::EmptyCompletion.status().is_server_error());
        assert!(ErrorBackend::UpstreamTimeout(Duration::from_secs(30)).status().is_server_error());
        assert!(
            ErrorBackend::UpstreamStatus {
                status: 429,
                body: "rate limited".into()
            }
            .status()
            .is_server_error()
        );
    }

    #[test]
    fn test_missing_field_is_client_error_with_message() {
        let err = ErrorBackend::MissingField("sentence");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.public_message(), "Field required: sentence");
    }

    #[test]
    fn test_upstream_body_is_not_exposed() {
        let err = ErrorBackend::UpstreamStatus {
            status: 401,
            body: "invalid api key sk-...".into(),
        };
        assert_eq!(err.public_message(), "LLM provider request failed");
    }
}
