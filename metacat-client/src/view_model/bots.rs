//! Option lists and derived text for the bot authentication forms.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use metacat_core::{AuthType, AuthenticationMechanism, JwtTokenExpiry, SsoServiceType, User};
use serde::{Deserialize, Serialize};

/// Label for the built-in JWT mechanism.
pub const JWT_OPTION_LABEL: &str = "Metacat JWT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    pub label: String,
    pub value: T,
}

/// Server-side authentication settings; only the provider matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthProviderConfig {
    #[serde(default)]
    pub provider: Option<String>,
}

/// One option per expiry in declaration order.
pub fn jwt_token_expiry_options() -> Vec<SelectOption<JwtTokenExpiry>> {
    JwtTokenExpiry::all()
        .iter()
        .map(|expiry| SelectOption {
            label: match expiry {
                JwtTokenExpiry::OneHour => "1 hr".to_string(),
                other => format!("{} days", other),
            },
            value: expiry.clone(),
        })
        .collect()
}

/// JWT is always offered; SSO is offered only for a known SSO provider.
pub fn auth_mechanism_type_options(
    auth_config: Option<&AuthProviderConfig>,
) -> Vec<SelectOption<AuthType>> {
    let jwt = SelectOption {
        label: JWT_OPTION_LABEL.to_string(),
        value: AuthType::Jwt,
    };
    let provider = auth_config
        .and_then(|config| config.provider.clone())
        .map(SsoServiceType::from);

    match provider.as_ref().and_then(SsoServiceType::label) {
        Some(label) => vec![
            jwt,
            SelectOption {
                label: format!("{} SSO", label),
                value: AuthType::Sso,
            },
        ],
        None => vec![jwt],
    }
}

/// Sentence describing when a token generated now would expire.
pub fn token_expiry_text(expiry: JwtTokenExpiry, now: DateTime<Utc>) -> String {
    match &expiry {
        JwtTokenExpiry::Unlimited => "The token will never expire!".to_string(),
        JwtTokenExpiry::OneHour => format!("The token will expire in {}", expiry),
        other => {
            let days = other.days().unwrap_or_default();
            let date = now + Duration::days(days);
            format!("The token will expire on {}", format_day(&date))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExpiry {
    pub token_expiry_date: String,
    pub is_token_expired: bool,
}

/// Expiry of an issued token from its `JWTTokenExpiresAt` (epoch millis).
pub fn token_expiry(expires_at_ms: i64, now: DateTime<Utc>) -> TokenExpiry {
    let token_expiry_date = match Utc.timestamp_millis_opt(expires_at_ms).single() {
        Some(at) => format!("{},{}", format_day(&at), at.format("%I:%M %p")),
        None => "Invalid date".to_string(),
    };
    TokenExpiry {
        token_expiry_date,
        is_token_expired: now.timestamp_millis() >= expires_at_ms,
    }
}

/// `Mon 3rd June, 2024`.
fn format_day(date: &DateTime<Utc>) -> String {
    let day = date.day();
    format!(
        "{} {}{} {}",
        date.format("%a"),
        day,
        ordinal_suffix(day),
        date.format("%B, %Y")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Initial values for the SSO credentials form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthMechanismFormValues {
    pub audience: Option<String>,
    pub secret_key: Option<String>,
    pub client_id: Option<String>,
    pub okta_email: Option<String>,
    #[serde(rename = "orgURL")]
    pub org_url: Option<String>,
    pub private_key: Option<String>,
    /// Comma-joined.
    pub scopes: Option<String>,
    pub domain: Option<String>,
    pub authority: Option<String>,
    pub client_secret: Option<String>,
    pub token_endpoint: Option<String>,
    pub email: String,
}

pub fn auth_mechanism_form_initial_values(
    mechanism: &AuthenticationMechanism,
    bot_user: &User,
) -> AuthMechanismFormValues {
    let email = bot_user.email.clone();
    let Some(config) = mechanism
        .config
        .as_ref()
        .and_then(|config| config.auth_config.as_ref())
    else {
        return AuthMechanismFormValues {
            email,
            ..Default::default()
        };
    };

    AuthMechanismFormValues {
        audience: config.audience.clone(),
        secret_key: config.secret_key.clone(),
        client_id: config.client_id.clone(),
        okta_email: config.email.clone(),
        org_url: config.org_url.clone(),
        private_key: config.private_key.clone(),
        scopes: config.scopes.as_ref().map(|scopes| scopes.join(",")),
        domain: config.domain.clone(),
        authority: config.authority.clone(),
        client_secret: config.client_secret.clone(),
        token_endpoint: config.token_endpoint.clone(),
        email,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacat_core::{AuthMechanismConfig, SsoAuthConfig};
    use metacat_test_utils::sample_user;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn test_expiry_option_labels() {
        let labels: Vec<_> = jwt_token_expiry_options()
            .into_iter()
            .map(|option| option.label)
            .collect();
        assert_eq!(
            labels,
            vec!["1 hr", "1 days", "7 days", "30 days", "60 days", "90 days", "Unlimited days"]
        );
    }

    #[test]
    fn test_auth_options_without_config() {
        let options = auth_mechanism_type_options(None);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, AuthType::Jwt);
    }

    #[test]
    fn test_auth_options_for_sso_providers() {
        for (provider, label) in [
            ("google", "Google SSO"),
            ("auth0", "Auth0 SSO"),
            ("azure", "Azure SSO"),
            ("okta", "Okta SSO"),
            ("custom-oidc", "CustomOidc SSO"),
        ] {
            let config = AuthProviderConfig {
                provider: Some(provider.to_string()),
            };
            let options = auth_mechanism_type_options(Some(&config));
            assert_eq!(options.len(), 2, "provider {}", provider);
            assert_eq!(options[1].label, label);
            assert_eq!(options[1].value, AuthType::Sso);
        }
    }

    #[test]
    fn test_auth_options_for_basic_is_jwt_only() {
        let config = AuthProviderConfig {
            provider: Some("basic".to_string()),
        };
        assert_eq!(auth_mechanism_type_options(Some(&config)).len(), 1);
        assert_eq!(auth_mechanism_type_options(Some(&AuthProviderConfig::default())).len(), 1);
    }

    #[test]
    fn test_token_expiry_text() {
        let now = at(2024, 5, 27, 10, 0);
        assert_eq!(
            token_expiry_text(JwtTokenExpiry::Unlimited, now),
            "The token will never expire!"
        );
        assert_eq!(
            token_expiry_text(JwtTokenExpiry::OneHour, now),
            "The token will expire in OneHour"
        );
        assert_eq!(
            token_expiry_text(JwtTokenExpiry::OneDay, now),
            "The token will expire on Tue 28th May, 2024"
        );
        assert_eq!(
            token_expiry_text(JwtTokenExpiry::SevenDays, now),
            "The token will expire on Mon 3rd June, 2024"
        );
    }

    #[test]
    fn test_token_expiry_formatting_and_state() {
        let expires_at = at(2024, 6, 3, 7, 33).timestamp_millis();

        let before = token_expiry(expires_at, at(2024, 6, 1, 0, 0));
        assert_eq!(before.token_expiry_date, "Mon 3rd June, 2024,07:33 AM");
        assert!(!before.is_token_expired);

        assert!(token_expiry(expires_at, at(2024, 6, 3, 7, 33)).is_token_expired);
    }

    #[test]
    fn test_ordinal_suffixes() {
        let suffixes: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(ordinal_suffix)
            .collect();
        assert_eq!(
            suffixes,
            vec!["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]
        );
    }

    #[test]
    fn test_form_values_join_scopes() {
        let user = sample_user("ingestion-bot");
        let mechanism = AuthenticationMechanism {
            auth_type: Some(AuthType::Sso),
            config: Some(AuthMechanismConfig {
                sso_service_type: Some(SsoServiceType::Okta),
                auth_config: Some(SsoAuthConfig {
                    client_id: Some("client".to_string()),
                    email: Some("svc@okta.example".to_string()),
                    scopes: Some(vec!["openid".to_string(), "email".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        };

        let values = auth_mechanism_form_initial_values(&mechanism, &user);

        assert_eq!(values.scopes.as_deref(), Some("openid,email"));
        assert_eq!(values.okta_email.as_deref(), Some("svc@okta.example"));
        assert_eq!(values.client_id.as_deref(), Some("client"));
        assert_eq!(values.email, "ingestion-bot@metacat.dev");
    }

    #[test]
    fn test_form_values_without_sso_config() {
        let user = sample_user("ingestion-bot");
        let values = auth_mechanism_form_initial_values(&AuthenticationMechanism::default(), &user);
        assert_eq!(
            values,
            AuthMechanismFormValues {
                email: "ingestion-bot@metacat.dev".to_string(),
                ..Default::default()
            }
        );
    }
}
