//! Error types for wa-cloud

use std::fmt;

use thiserror::Error;

/// Structured error payload returned by the Graph API.
///
/// Carries the HTTP status alongside the vendor's error code, message,
/// optional subcode, and optional user-facing title/text so callers can
/// match on the failure programmatically instead of parsing a string.
#[derive(Debug, Clone)]
pub struct GraphApiError {
    pub status: u16,
    pub code: i64,
    pub message: String,
    pub subcode: Option<i64>,
    pub user_title: Option<String>,
    pub user_message: Option<String>,
}

impl fmt::Display for GraphApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WhatsApp API error: {} - code {}: {}",
            self.status, self.code, self.message
        )?;
        if let Some(subcode) = self.subcode {
            write!(f, " (subcode {subcode})")?;
        }
        if let Some(ref title) = self.user_title {
            write!(f, " - {title}")?;
        }
        if let Some(ref user_message) = self.user_message {
            write!(f, ": {user_message}")?;
        }
        Ok(())
    }
}

/// wa-cloud error type
#[derive(Error, Debug)]
pub enum WhatsAppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("WhatsApp plugin not initialized")]
    NotInitialized,

    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    #[error("Media message requires either a url or a filePath")]
    MissingMediaSource,

    #[error("Media file not found: {0}")]
    MediaFileNotFound(String),

    #[error("WhatsApp API response missing field: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    Graph(GraphApiError),

    #[error("WhatsApp API error: {0}")]
    Api(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WhatsAppError>;

impl From<WhatsAppError> for wa_core::Error {
    fn from(err: WhatsAppError) -> Self {
        match err {
            WhatsAppError::Config(msg) => wa_core::Error::Config(msg),
            WhatsAppError::ToolNotFound(name) => wa_core::Error::ToolNotFound(name),
            other => wa_core::Error::ToolExecution(other.to_string()),
        }
    }
}
