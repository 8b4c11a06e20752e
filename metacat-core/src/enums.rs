//! Enum types for catalog entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error when parsing an invalid enum string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind}: {value}")]
pub struct EnumParseError {
    pub kind: &'static str,
    pub value: String,
}

impl EnumParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// TABLES
// ============================================================================

/// Physical or logical kind of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TableType {
    #[default]
    Regular,
    External,
    View,
    SecureView,
    MaterializedView,
    Iceberg,
    Local,
    Partitioned,
    Foreign,
    Transient,
}

impl TableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::Regular => "Regular",
            TableType::External => "External",
            TableType::View => "View",
            TableType::SecureView => "SecureView",
            TableType::MaterializedView => "MaterializedView",
            TableType::Iceberg => "Iceberg",
            TableType::Local => "Local",
            TableType::Partitioned => "Partitioned",
            TableType::Foreign => "Foreign",
            TableType::Transient => "Transient",
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DATA QUALITY
// ============================================================================

/// Outcome of a test case run.
///
/// The server's status vocabulary is open-ended; anything outside the known
/// set is kept verbatim in `Unknown` so it can be counted instead of dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestCaseStatus {
    Success,
    Failed,
    Aborted,
    Queued,
    Unknown(String),
}

impl TestCaseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TestCaseStatus::Success => "Success",
            TestCaseStatus::Failed => "Failed",
            TestCaseStatus::Aborted => "Aborted",
            TestCaseStatus::Queued => "Queued",
            TestCaseStatus::Unknown(raw) => raw,
        }
    }

    /// Parse a server status string. Never fails; see `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Success" => TestCaseStatus::Success,
            "Failed" => TestCaseStatus::Failed,
            "Aborted" => TestCaseStatus::Aborted,
            "Queued" => TestCaseStatus::Queued,
            other => TestCaseStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for TestCaseStatus {
    fn from(raw: String) -> Self {
        match TestCaseStatus::parse(&raw) {
            TestCaseStatus::Unknown(_) => TestCaseStatus::Unknown(raw),
            known => known,
        }
    }
}

impl From<TestCaseStatus> for String {
    fn from(status: TestCaseStatus) -> Self {
        match status {
            TestCaseStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TestCaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soft-delete visibility filter for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Include {
    #[default]
    NonDeleted,
    Deleted,
    All,
}

impl Include {
    pub fn as_str(&self) -> &'static str {
        match self {
            Include::NonDeleted => "non-deleted",
            Include::Deleted => "deleted",
            Include::All => "all",
        }
    }
}

// ============================================================================
// BOTS AND AUTHENTICATION
// ============================================================================

/// Lifetime of a generated JWT token.
///
/// Declaration order matches the order options are offered to users. Values
/// outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JwtTokenExpiry {
    OneHour,
    OneDay,
    SevenDays,
    ThirtyDays,
    SixtyDays,
    NinetyDays,
    Unlimited,
    Other(String),
}

impl JwtTokenExpiry {
    pub fn all() -> &'static [JwtTokenExpiry] {
        &[
            JwtTokenExpiry::OneHour,
            JwtTokenExpiry::OneDay,
            JwtTokenExpiry::SevenDays,
            JwtTokenExpiry::ThirtyDays,
            JwtTokenExpiry::SixtyDays,
            JwtTokenExpiry::NinetyDays,
            JwtTokenExpiry::Unlimited,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            JwtTokenExpiry::OneHour => "OneHour",
            JwtTokenExpiry::OneDay => "1",
            JwtTokenExpiry::SevenDays => "7",
            JwtTokenExpiry::ThirtyDays => "30",
            JwtTokenExpiry::SixtyDays => "60",
            JwtTokenExpiry::NinetyDays => "90",
            JwtTokenExpiry::Unlimited => "Unlimited",
            JwtTokenExpiry::Other(raw) => raw,
        }
    }

    /// Known value for `raw`, or `Other`.
    pub fn parse(raw: &str) -> Self {
        JwtTokenExpiry::all()
            .iter()
            .find(|expiry| expiry.as_str() == raw)
            .cloned()
            .unwrap_or_else(|| JwtTokenExpiry::Other(raw.to_string()))
    }

    /// Number of days the token lives. `None` for one hour and unlimited; an
    /// `Other` value counts as days when it is numeric.
    pub fn days(&self) -> Option<i64> {
        match self {
            JwtTokenExpiry::OneDay => Some(1),
            JwtTokenExpiry::SevenDays => Some(7),
            JwtTokenExpiry::ThirtyDays => Some(30),
            JwtTokenExpiry::SixtyDays => Some(60),
            JwtTokenExpiry::NinetyDays => Some(90),
            JwtTokenExpiry::Other(raw) => raw.trim().parse().ok(),
            JwtTokenExpiry::OneHour | JwtTokenExpiry::Unlimited => None,
        }
    }
}

impl From<String> for JwtTokenExpiry {
    fn from(raw: String) -> Self {
        match JwtTokenExpiry::parse(&raw) {
            JwtTokenExpiry::Other(_) => JwtTokenExpiry::Other(raw),
            known => known,
        }
    }
}

impl From<JwtTokenExpiry> for String {
    fn from(expiry: JwtTokenExpiry) -> Self {
        match expiry {
            JwtTokenExpiry::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JwtTokenExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for user input; only the offered values are accepted.
impl FromStr for JwtTokenExpiry {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match JwtTokenExpiry::parse(s) {
            JwtTokenExpiry::Other(_) => Err(EnumParseError::new("JWT token expiry", s)),
            known => Ok(known),
        }
    }
}

/// How a user (or bot user) authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthType {
    Jwt,
    Sso,
    Basic,
}

/// SSO identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SsoServiceType {
    Google,
    Okta,
    Auth0,
    CustomOidc,
    Azure,
    Other(String),
}

impl SsoServiceType {
    pub fn as_str(&self) -> &str {
        match self {
            SsoServiceType::Google => "google",
            SsoServiceType::Okta => "okta",
            SsoServiceType::Auth0 => "auth0",
            SsoServiceType::CustomOidc => "custom-oidc",
            SsoServiceType::Azure => "azure",
            SsoServiceType::Other(raw) => raw,
        }
    }

    /// Human label used in option lists, e.g. `Google` or `CustomOidc`.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            SsoServiceType::Google => Some("Google"),
            SsoServiceType::Okta => Some("Okta"),
            SsoServiceType::Auth0 => Some("Auth0"),
            SsoServiceType::CustomOidc => Some("CustomOidc"),
            SsoServiceType::Azure => Some("Azure"),
            SsoServiceType::Other(_) => None,
        }
    }
}

impl From<String> for SsoServiceType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "google" => SsoServiceType::Google,
            "okta" => SsoServiceType::Okta,
            "auth0" => SsoServiceType::Auth0,
            "custom-oidc" => SsoServiceType::CustomOidc,
            "azure" => SsoServiceType::Azure,
            _ => SsoServiceType::Other(raw),
        }
    }
}

impl From<SsoServiceType> for String {
    fn from(provider: SsoServiceType) -> Self {
        match provider {
            SsoServiceType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

// ============================================================================
// PERMISSIONS
// ============================================================================

/// Resource kind used when resolving permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceEntity {
    Bot,
    Table,
    Classification,
    Tag,
    User,
    TestCase,
}

impl ResourceEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceEntity::Bot => "bot",
            ResourceEntity::Table => "table",
            ResourceEntity::Classification => "classification",
            ResourceEntity::Tag => "tag",
            ResourceEntity::User => "user",
            ResourceEntity::TestCase => "testCase",
        }
    }
}

impl fmt::Display for ResourceEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_known_values_parse() {
        assert_eq!(TestCaseStatus::parse("Success"), TestCaseStatus::Success);
        assert_eq!(TestCaseStatus::parse("Failed"), TestCaseStatus::Failed);
        assert_eq!(TestCaseStatus::parse("Aborted"), TestCaseStatus::Aborted);
        assert_eq!(TestCaseStatus::parse("Queued"), TestCaseStatus::Queued);
    }

    #[test]
    fn test_status_unknown_value_is_kept() {
        let status: TestCaseStatus = serde_json::from_str("\"Skipped\"").expect("decode");
        assert_eq!(status, TestCaseStatus::Unknown("Skipped".to_string()));
        assert_eq!(serde_json::to_string(&status).expect("encode"), "\"Skipped\"");
    }

    #[test]
    fn test_token_expiry_wire_values() {
        let values: Vec<String> = JwtTokenExpiry::all()
            .iter()
            .map(|e| serde_json::to_value(e).expect("encode"))
            .map(|v| v.as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(values, vec!["OneHour", "1", "7", "30", "60", "90", "Unlimited"]);
    }

    #[test]
    fn test_token_expiry_decodes_each_wire_value() {
        let cases = [
            ("OneHour", JwtTokenExpiry::OneHour),
            ("1", JwtTokenExpiry::OneDay),
            ("7", JwtTokenExpiry::SevenDays),
            ("30", JwtTokenExpiry::ThirtyDays),
            ("60", JwtTokenExpiry::SixtyDays),
            ("90", JwtTokenExpiry::NinetyDays),
            ("Unlimited", JwtTokenExpiry::Unlimited),
            ("2", JwtTokenExpiry::Other("2".to_string())),
        ];
        for (wire, expected) in cases {
            let decoded: JwtTokenExpiry =
                serde_json::from_value(serde_json::json!(wire)).expect("decode");
            assert_eq!(decoded, expected);
            assert_eq!(serde_json::to_value(&decoded).expect("encode"), serde_json::json!(wire));
        }
        assert_eq!(JwtTokenExpiry::OneDay.days(), Some(1));
        assert_eq!(JwtTokenExpiry::Other("2".to_string()).days(), Some(2));
        assert_eq!(JwtTokenExpiry::OneHour.days(), None);
    }

    #[test]
    fn test_token_expiry_from_str() {
        assert_eq!("30".parse::<JwtTokenExpiry>(), Ok(JwtTokenExpiry::ThirtyDays));
        assert_eq!("OneHour".parse::<JwtTokenExpiry>(), Ok(JwtTokenExpiry::OneHour));
        assert!("45".parse::<JwtTokenExpiry>().is_err());
    }

    #[test]
    fn test_sso_provider_round_trips_unknown() {
        let provider: SsoServiceType = serde_json::from_str("\"saml\"").expect("decode");
        assert_eq!(provider, SsoServiceType::Other("saml".to_string()));
        assert!(provider.label().is_none());
    }

    #[test]
    fn test_auth_type_wire_values() {
        assert_eq!(serde_json::to_string(&AuthType::Jwt).expect("encode"), "\"JWT\"");
        assert_eq!(serde_json::to_string(&AuthType::Sso).expect("encode"), "\"SSO\"");
    }

    #[test]
    fn test_include_wire_values() {
        assert_eq!(Include::NonDeleted.as_str(), "non-deleted");
        assert_eq!(
            serde_json::to_string(&Include::NonDeleted).expect("encode"),
            "\"non-deleted\""
        );
    }
}
