//! Error types for the Metacat client.

use crate::api::ApiClientError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiClientError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Telemetry error: {0}")]
    Telemetry(String),
    /// The server answered a mutation successfully but sent no entity back.
    #[error("Empty response from {path}")]
    UnexpectedEmptyResponse { path: String },
    #[error("Not permitted to {operation}")]
    PermissionDenied { operation: &'static str },
    #[error("No {entity} loaded")]
    NotLoaded { entity: &'static str },
    #[error("Usage: {0}")]
    Usage(String),
}
