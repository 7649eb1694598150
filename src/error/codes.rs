//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Record errors
//! - 2xx: Network/transport errors
//! - 3xx: Config errors
//! - 4xx: Schema errors (backend response does not look as expected)
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `RecordNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Record errors (1xx)
    // ========================================
    /// E101: Resource is absent at the requested path
    RecordNotFound,
    /// E102: Backend does not offer the requested operation
    OperationUnsupported,

    // ========================================
    // Network errors (2xx)
    // ========================================
    /// E201: Backend answered with a status other than 200/404
    TransportFailed,
    /// E202: Backend could not be reached at all
    NetworkUnreachable,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Schema errors (4xx)
    // ========================================
    /// E401: Response body is not JSON or lacks a required key
    MalformedResponse,
    /// E402: Modification date could not be parsed
    InvalidDate,
    /// E403: Output serialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `RecordNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::RecordNotFound => 101,
            Self::OperationUnsupported => 102,

            Self::TransportFailed => 201,
            Self::NetworkUnreachable => 202,

            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,

            Self::MalformedResponse => 401,
            Self::InvalidDate => 402,
            Self::SerializationError => 403,

            Self::IoError => 901,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Check if re-running the same command may succeed.
    ///
    /// Transport failures leave a partially cleaned bug behind; the cascade
    /// is idempotent, so those count as recoverable. Schema mismatches do not
    /// go away on retry.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::RecordNotFound
            | Self::TransportFailed
            | Self::NetworkUnreachable
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::IoError => true,

            Self::OperationUnsupported
            | Self::MalformedResponse
            | Self::InvalidDate
            | Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "record",
            2 => "network",
            3 => "config",
            4 => "schema",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::RecordNotFound,
            Self::OperationUnsupported,
            Self::TransportFailed,
            Self::NetworkUnreachable,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::MalformedResponse,
            Self::InvalidDate,
            Self::SerializationError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
