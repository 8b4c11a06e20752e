//! Data-quality test cases bound to entities by entity link.

use crate::enums::TestCaseStatus;
use crate::identity::{EntityId, EntityLink};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case_status: Option<TestCaseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    pub entity_link: EntityLink,
    /// FQN of the entity the test is bound to.
    #[serde(rename = "entityFQN", default, skip_serializing_if = "Option::is_none")]
    pub entity_fqn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_case_result: Option<TestCaseResult>,
}

impl TestCase {
    /// Status of the latest result; `None` when the test never ran.
    pub fn status(&self) -> Option<&TestCaseStatus> {
        self.test_case_result
            .as_ref()
            .and_then(|result| result.test_case_status.as_ref())
    }

    /// True only when the test's `entityFQN` equals `fqn` exactly.
    pub fn belongs_to(&self, fqn: &str) -> bool {
        self.entity_fqn.as_deref() == Some(fqn)
    }
}
