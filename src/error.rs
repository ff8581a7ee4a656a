//! Error types for the client
//!
//! Everything here is `Clone` because errors travel back to the UI inside
//! iced messages.

use std::path::PathBuf;
use thiserror::Error;

pub const UNSUPPORTED_MEDIA_MESSAGE: &str = "Please upload a valid image file (JPEG, PNG, HEIC).";
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. Please try again.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const INVALID_LEVEL_MESSAGE: &str = "The prediction service returned an invalid spice level.";
pub const FEEDBACK_FAILED_MESSAGE: &str = "Feedback submission failed. Please try again.";

/// Failures talking to the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 415 from the service
    #[error("unsupported media type")]
    UnsupportedMediaType,

    /// Error status carrying a human-readable `detail` field
    #[error("server error {status}: {detail}")]
    ServerDetail { status: u16, detail: String },

    /// Transport failure or an error status without usable detail
    #[error("request failed: {0}")]
    Request(String),

    /// Success status, but the level is outside 0..=5
    #[error("spice level {0} is out of range")]
    InvalidSpiceLevel(i64),

    /// Anything else (unreadable success body, malformed request)
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Message shown inline under the prediction controls
    pub fn user_message(&self) -> String {
        match self {
            ApiError::UnsupportedMediaType => UNSUPPORTED_MEDIA_MESSAGE.to_string(),
            ApiError::ServerDetail { detail, .. } => detail.clone(),
            ApiError::Request(_) => PREDICTION_FAILED_MESSAGE.to_string(),
            ApiError::InvalidSpiceLevel(_) => INVALID_LEVEL_MESSAGE.to_string(),
            ApiError::Unexpected(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    }

    /// Message shown inside the feedback modal
    pub fn feedback_message(&self) -> String {
        match self {
            ApiError::ServerDetail { detail, .. } => detail.clone(),
            _ => FEEDBACK_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Failures turning a picked file into an upload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("preview task failed: {0}")]
    Task(String),
}

/// Failures loading the optional config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
