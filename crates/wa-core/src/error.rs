//! Error types for wa-core

use thiserror::Error;

/// Main error type for wa-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Plugin initialization error: {0}")]
    PluginInit(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for wa-core
pub type Result<T> = std::result::Result<T, Error>;
