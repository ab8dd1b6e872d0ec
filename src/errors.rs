use thiserror::Error;

use crate::event_parser::ParseError;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Invalid webhook signature")]
    SignatureInvalid,

    #[error("Image upload failed: {0}")]
    UploadFailed(String),

    #[error("Form builder request failed: {0}")]
    FormBuildFailed(String),

    #[error("Participant query failed: {0}")]
    QueryFailed(String),

    #[error("Failed to parse message: {0}")]
    ParseError(String),

    #[error("Failed to access LINE API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Renders a transport error, naming timeouts explicitly.
#[must_use]
pub fn describe_http_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("request timed out: {error}")
    } else {
        error.to_string()
    }
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::HttpError(describe_http_error(&error))
    }
}

impl From<ParseError> for BotError {
    fn from(error: ParseError) -> Self {
        BotError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for BotError {
    fn from(error: anyhow::Error) -> Self {
        BotError::ApiError(error.to_string())
    }
}
