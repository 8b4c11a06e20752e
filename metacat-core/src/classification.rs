//! Classifications and the tags they own.

use crate::common::EntityReference;
use crate::identity::EntityId;
use serde::{Deserialize, Serialize};

/// Named taxonomy category grouping tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

/// Leaf label under a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<EntityReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u64>,
}

/// Payload for `POST /classifications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassification {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Payload for `POST /tags`.
///
/// `classification` is the owning classification's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTag {
    pub name: String,
    pub description: String,
    pub classification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classification_tolerates_unknown_fields() {
        let value = json!({
            "id": "9b2f9a4e-8d5c-4f2e-9a7e-6a1c1b2f3d4e",
            "name": "PII",
            "description": "Personal data",
            "provider": "system",
            "mutuallyExclusive": true
        });
        let classification: Classification = serde_json::from_value(value).expect("decode");
        assert_eq!(classification.name, "PII");
        assert!(classification.fully_qualified_name.is_none());
    }

    #[test]
    fn test_create_tag_wire_shape() {
        let payload = CreateTag {
            name: "Sensitive".to_string(),
            description: "Sensitive data".to_string(),
            classification: "PII".to_string(),
            display_name: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).expect("encode"),
            json!({
                "name": "Sensitive",
                "description": "Sensitive data",
                "classification": "PII"
            })
        );
    }
}
