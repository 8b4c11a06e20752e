//! Resource clients for the catalog REST API.
//!
//! Every function builds a path, delegates to the shared `Transport`, and
//! decodes the body. Transport errors propagate unchanged; nothing is cached
//! or retried.

pub mod http;
pub mod permissions;
pub mod query;
pub mod tables;
pub mod tags;
pub mod test_cases;
pub mod users;

pub use http::HttpTransport;
pub use query::{url_with_query_fields, QueryFields, QueryString};
pub use tags::DeleteOptions;
pub use test_cases::ListTestCaseParams;

use crate::config::ClientConfig;
use metacat_core::{ApiRequest, Transport, TransportError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to encode request for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Config error: {0}")]
    Config(String),
}

impl ApiClientError {
    /// Message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiClientError::Transport(err) => err.user_message(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiClientError::Transport(err) if err.is_not_found())
    }
}

/// Handle to the catalog API shared by controllers.
#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn Transport>,
}

impl RestClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Client over HTTP using the configured base URL, timeout and token.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let body = self.send(ApiRequest::get(path)).await?;
        decode(path, body)
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(path, body)?;
        let response = self.send(ApiRequest::post(path, body)).await?;
        decode(path, response)
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(path, body)?;
        let response = self.send(ApiRequest::put(path, body)).await?;
        decode(path, response)
    }

    /// PATCH returning the raw body, so callers can tell an empty success
    /// apart from a decoded entity.
    pub(crate) async fn patch_raw<B>(&self, path: &str, operations: &B) -> Result<Value, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = encode(path, operations)?;
        self.send(ApiRequest::patch(path, body)).await
    }

    pub(crate) async fn delete_json<T>(&self, path: &str) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let body = self.send(ApiRequest::delete(path)).await?;
        decode(path, body)
    }

    async fn send(&self, request: ApiRequest) -> Result<Value, ApiClientError> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(%method, path = %path, "sending catalog request");
        match self.transport.send(request).await {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::warn!(%method, path = %path, error = %err, "catalog request failed");
                Err(err.into())
            }
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient").finish_non_exhaustive()
    }
}

fn encode<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Value, ApiClientError> {
    serde_json::to_value(body).map_err(|source| ApiClientError::Encode {
        path: path.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(path: &str, body: Value) -> Result<T, ApiClientError> {
    serde_json::from_value(body).map_err(|source| ApiClientError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Percent-encode one path segment (names and FQNs).
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
