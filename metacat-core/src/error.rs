//! Error types for transport operations

use thiserror::Error;

/// Errors raised by a `Transport`.
///
/// Resource clients propagate these unchanged; callers decide how to surface
/// them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error calling {path}: {reason}")]
    Network { path: String, reason: String },

    #[error("HTTP {status} from {path}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    #[error("Failed to encode request body for {path}: {reason}")]
    Encode { path: String, reason: String },

    #[error("Failed to decode response body from {path}: {reason}")]
    Decode { path: String, reason: String },
}

impl TransportError {
    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message suitable for a user-visible notification.
    pub fn user_message(&self) -> String {
        match self {
            TransportError::Status { message, .. } if !message.trim().is_empty() => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
