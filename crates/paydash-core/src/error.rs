//! Error types for paydash-core

use paydash_client::ClientError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Upstream fetch failed
    TransportFailure,
    /// Selected employee does not exist
    UnknownEmployee,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::TransportFailure => write!(f, "TRANSPORT_FAILURE"),
            ErrorCode::UnknownEmployee => write!(f, "UNKNOWN_EMPLOYEE"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for paydash-core
///
/// Transport failures are never retried here; they propagate to the caller
/// of the triggering transition and leave the view state untouched.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Unknown employee: {id}")]
    UnknownEmployee { id: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Transport { .. } => ErrorCode::TransportFailure,
            CoreError::UnknownEmployee { .. } => ErrorCode::UnknownEmployee,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::Transport { .. } => ErrorSeverity::Error,
            CoreError::UnknownEmployee { .. } => ErrorSeverity::Warning,
        }
    }
}

impl From<ClientError> for CoreError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::UnknownEmployee { id } => CoreError::UnknownEmployee { id },
            other => CoreError::Transport {
                message: other.to_string(),
            },
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
