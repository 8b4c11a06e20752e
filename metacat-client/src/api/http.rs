//! `Transport` over HTTP.

use super::ApiClientError;
use crate::config::{AuthConfig, ClientConfig};
use async_trait::async_trait;
use metacat_core::{ApiRequest, Method, Transport, TransportError, TransportResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Error body returned by the catalog server on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    code: Option<u16>,
    message: String,
}

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderMap,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let auth_header = build_auth_headers(&config.auth)?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> TransportResult<Value> {
        let url = self.url(&request.path);
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };
        let mut builder = builder.headers(self.auth_header.clone());

        if let Some(body) = &request.body {
            builder = match request.method {
                Method::Patch => {
                    let bytes = serde_json::to_vec(body).map_err(|e| TransportError::Encode {
                        path: request.path.clone(),
                        reason: e.to_string(),
                    })?;
                    builder.header(CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE).body(bytes)
                }
                _ => builder.json(body),
            };
        }

        let response = builder
            .send()
            .await
            .map_err(|e| network_error(&request.path, e))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| network_error(&request.path, e))?;
        interpret_response(&request.path, status, &bytes)
    }
}

fn network_error(path: &str, err: reqwest::Error) -> TransportError {
    TransportError::Network {
        path: path.to_string(),
        reason: err.to_string(),
    }
}

/// Decode a raw response into a body or a `TransportError`.
///
/// Empty successful bodies (including 204) decode to `Value::Null`.
fn interpret_response(path: &str, status: u16, bytes: &[u8]) -> TransportResult<Value> {
    if (200..300).contains(&status) {
        if status == 204 || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(bytes).map_err(|e| TransportError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        });
    }

    let text = String::from_utf8_lossy(bytes);
    let message = match serde_json::from_str::<ServerErrorBody>(&text) {
        Ok(body) => {
            if let Some(code) = body.code {
                if code != status {
                    tracing::debug!(path = %path, status, code, "server error code differs from HTTP status");
                }
            }
            body.message
        }
        Err(_) => text.trim().to_string(),
    };
    Err(TransportError::Status {
        path: path.to_string(),
        status,
        message,
    })
}

fn build_auth_headers(auth: &AuthConfig) -> Result<HeaderMap, ApiClientError> {
    let mut headers = HeaderMap::new();
    if let Some(jwt) = &auth.jwt {
        let value = format!("Bearer {}", jwt);
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&value).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;
    use serde_json::json;

    fn config(base: &str, jwt: Option<&str>) -> ClientConfig {
        ClientConfig {
            api_base_url: base.to_string(),
            request_timeout_ms: 1_000,
            locale: "en".to_string(),
            auth: AuthConfig {
                jwt: jwt.map(str::to_string),
            },
            log: LogConfig::default(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = HttpTransport::new(&config("http://localhost:8585/api/v1/", None))
            .expect("transport");
        assert_eq!(transport.url("/tags"), "http://localhost:8585/api/v1/tags");
    }

    #[test]
    fn test_bearer_header_set_from_jwt() {
        let headers = build_auth_headers(&AuthConfig {
            jwt: Some("abc".to_string()),
        })
        .expect("headers");
        assert_eq!(
            headers.get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer abc")
        );
    }

    #[test]
    fn test_invalid_jwt_is_config_error() {
        let err = build_auth_headers(&AuthConfig {
            jwt: Some("bad\ntoken".to_string()),
        })
        .unwrap_err();
        assert!(matches!(err, ApiClientError::Config(_)));
    }

    #[test]
    fn test_empty_success_is_null() {
        assert_eq!(interpret_response("/bots/1", 200, b""), Ok(Value::Null));
        assert_eq!(interpret_response("/bots/1", 204, b""), Ok(Value::Null));
    }

    #[test]
    fn test_success_body_decoded() {
        let body = br#"{"data": [], "paging": {"total": 0}}"#;
        assert_eq!(
            interpret_response("/tags", 200, body),
            Ok(json!({ "data": [], "paging": { "total": 0 } }))
        );
    }

    #[test]
    fn test_server_error_message_extracted() {
        let body = br#"{"code": 404, "message": "bot instance for foo not found"}"#;
        let err = interpret_response("/bots/name/foo", 404, body).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "bot instance for foo not found");
    }

    #[test]
    fn test_plain_text_error_kept() {
        let err = interpret_response("/tags", 502, b"Bad Gateway\n").unwrap_err();
        assert_eq!(
            err,
            TransportError::Status {
                path: "/tags".to_string(),
                status: 502,
                message: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = interpret_response("/tags", 200, b"{not json").unwrap_err();
        assert!(matches!(err, TransportError::Decode { .. }));
    }
}
