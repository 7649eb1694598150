//! Error handling for bugrepo.
//!
//! This module provides:
//! - [`BugError`]: The main error enum for all repository operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing

mod codes;

use std::io;

use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for bugrepo operations.
#[derive(Error, Debug)]
pub enum BugError {
    /// The backend answered 404 for this path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered with any status other than 200 or 404.
    #[error("HTTP {status} for {path}")]
    Transport { status: u16, path: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{backend} does not support {operation}")]
    Unsupported {
        backend: &'static str,
        operation: &'static str,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BugError {
    /// Shorthand for a missing required key in a backend response.
    pub fn missing_key(key: &str, context: &str) -> Self {
        Self::MalformedResponse(format!("missing '{key}' in {context}"))
    }

    /// True for the one error kind the repositories recover from locally.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::RecordNotFound,
            Self::Transport { .. } => ErrorCode::TransportFailed,
            Self::MalformedResponse(_) => ErrorCode::MalformedResponse,
            Self::Unsupported { .. } => ErrorCode::OperationUnsupported,
            Self::Network(_) => ErrorCode::NetworkUnreachable,
            Self::InvalidDate(_) => ErrorCode::InvalidDate,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::NotFound(path) => Some(serde_json::json!({ "path": path })),
            Self::Transport { status, path } => {
                Some(serde_json::json!({ "status": status, "path": path }))
            }
            Self::Unsupported { backend, operation } => {
                Some(serde_json::json!({ "backend": backend, "operation": operation }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Render the error object printed in JSON output mode.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let code = self.code();
        serde_json::json!({
            "error": true,
            "code": code,
            "numeric_code": code.numeric(),
            "category": code.category(),
            "recoverable": code.is_recoverable(),
            "message": self.to_string(),
            "context": self.context(),
        })
    }
}

/// Result type alias using BugError.
pub type Result<T> = std::result::Result<T, BugError>;
