use std::io;

use thiserror::Error;

/// Library-wide error type for hymns-data operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file explicitly requested but not found.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Resolved source could not be turned into a request URL.
    #[error("Invalid dataset URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },

    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Failed to fetch hymns from {url}: {details}")]
    Transport { url: String, details: String },

    /// The server answered with a non-success status.
    #[error("Failed to fetch hymns from {url} (status {status})")]
    HttpStatus { url: String, status: u16 },

    /// The body could not be parsed as JSON.
    #[error("Malformed JSON from {url}: {details}")]
    MalformedJson { url: String, details: String },
}

impl AppError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Replace the URL carried by a network error with `url`.
    ///
    /// Callers use this to report the source string they resolved rather than
    /// its normalized form. Other variants are returned unchanged.
    pub fn with_url<S: Into<String>>(self, url: S) -> Self {
        match self {
            AppError::InvalidUrl { details, .. } => {
                AppError::InvalidUrl { url: url.into(), details }
            }
            AppError::Transport { details, .. } => AppError::Transport { url: url.into(), details },
            AppError::HttpStatus { status, .. } => AppError::HttpStatus { url: url.into(), status },
            AppError::MalformedJson { details, .. } => {
                AppError::MalformedJson { url: url.into(), details }
            }
            other => other,
        }
    }
}
