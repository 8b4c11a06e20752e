//! Users, bots, and bot authentication mechanisms.

use crate::common::EntityReference;
use crate::enums::{AuthType, JwtTokenExpiry, SsoServiceType};
use crate::identity::EntityId;
use serde::{Deserialize, Serialize};

/// Provider-specific SSO client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoAuthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Service-account email (Okta).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "orgURL", default, skip_serializing_if = "Option::is_none")]
    pub org_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
}

/// Either a JWT mechanism or an SSO mechanism; the server sends one shape
/// or the other, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthMechanismConfig {
    #[serde(rename = "JWTToken", default, skip_serializing_if = "Option::is_none")]
    pub jwt_token: Option<String>,
    #[serde(rename = "JWTTokenExpiry", default, skip_serializing_if = "Option::is_none")]
    pub jwt_token_expiry: Option<JwtTokenExpiry>,
    /// Epoch milliseconds.
    #[serde(rename = "JWTTokenExpiresAt", default, skip_serializing_if = "Option::is_none")]
    pub jwt_token_expires_at: Option<i64>,
    #[serde(rename = "ssoServiceType", default, skip_serializing_if = "Option::is_none")]
    pub sso_service_type: Option<SsoServiceType>,
    #[serde(rename = "authConfig", default, skip_serializing_if = "Option::is_none")]
    pub auth_config: Option<SsoAuthConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationMechanism {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<AuthType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<AuthMechanismConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_mechanism: Option<AuthenticationMechanism>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

/// Service account; its user record is linked 1:1 by FQN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub bot_user: EntityReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

impl Bot {
    /// FQN of the linked bot user, or an empty string.
    pub fn bot_user_fqn(&self) -> &str {
        self.bot_user
            .fully_qualified_name
            .as_deref()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_jwt_mechanism_decodes() {
        let mechanism: AuthenticationMechanism = serde_json::from_value(json!({
            "authType": "JWT",
            "config": {
                "JWTToken": "eyJ...",
                "JWTTokenExpiry": "30",
                "JWTTokenExpiresAt": 1717400000000i64
            }
        }))
        .expect("decode");
        let config = mechanism.config.expect("config");
        assert_eq!(mechanism.auth_type, Some(AuthType::Jwt));
        assert_eq!(config.jwt_token_expiry, Some(JwtTokenExpiry::ThirtyDays));
        assert_eq!(config.jwt_token_expires_at, Some(1_717_400_000_000));
    }

    #[test]
    fn test_user_with_one_hour_expiry_decodes() {
        let user: User = serde_json::from_value(json!({
            "id": "3f2b1c9e-1a2b-4c3d-8e9f-0a1b2c3d4e5f",
            "name": "ingestion-bot",
            "email": "ingestion-bot@metacat.dev",
            "authenticationMechanism": {
                "authType": "JWT",
                "config": { "JWTTokenExpiry": "OneHour" }
            }
        }))
        .expect("decode");
        let expiry = user
            .authentication_mechanism
            .and_then(|m| m.config)
            .and_then(|c| c.jwt_token_expiry);
        assert_eq!(expiry, Some(JwtTokenExpiry::OneHour));
    }

    #[test]
    fn test_sso_mechanism_decodes() {
        let mechanism: AuthenticationMechanism = serde_json::from_value(json!({
            "authType": "SSO",
            "config": {
                "ssoServiceType": "okta",
                "authConfig": {
                    "clientId": "abc",
                    "orgURL": "https://example.okta.com",
                    "scopes": ["openid", "email"]
                }
            }
        }))
        .expect("decode");
        let config = mechanism.config.expect("config");
        let auth = config.auth_config.expect("auth config");
        assert_eq!(config.sso_service_type, Some(SsoServiceType::Okta));
        assert_eq!(auth.org_url.as_deref(), Some("https://example.okta.com"));
        assert_eq!(auth.scopes.map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_bot_user_fqn() {
        let bot: Bot = serde_json::from_value(json!({
            "id": "3c9d8e7f-6a5b-4c3d-2e1f-0a9b8c7d6e5f",
            "name": "ingestion-bot",
            "botUser": {
                "id": "4d0e9f8a-7b6c-5d4e-3f2a-1b0c9d8e7f6a",
                "type": "user",
                "fullyQualifiedName": "ingestion-bot"
            }
        }))
        .expect("decode");
        assert_eq!(bot.bot_user_fqn(), "ingestion-bot");
    }
}
