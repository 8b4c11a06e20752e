//! Data-quality test case listing.

use super::query::QueryString;
use super::{ApiClientError, RestClient};
use metacat_core::{EntityLink, Include, Paging, TestCase};

/// Fields needed to tally a table's test results.
pub const TEST_CASE_SUMMARY_FIELDS: &str = "testCaseResult,entityLink,testDefinition,testSuite";

/// Effectively unbounded page size used by the summary views.
pub const UNBOUNDED_LIMIT: u32 = 100_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ListTestCaseParams {
    pub fields: Option<String>,
    pub entity_link: Option<EntityLink>,
    pub include_all_tests: Option<bool>,
    pub limit: Option<u32>,
    pub include: Option<Include>,
}

impl ListTestCaseParams {
    /// Every test case bound to the table `fqn`, deleted ones included.
    pub fn for_table(fqn: &str) -> Self {
        Self {
            fields: Some(TEST_CASE_SUMMARY_FIELDS.to_string()),
            entity_link: Some(EntityLink::table(fqn)),
            include_all_tests: Some(true),
            limit: Some(UNBOUNDED_LIMIT),
            include: Some(Include::Deleted),
        }
    }

    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        if let Some(fields) = &self.fields {
            query.raw("fields", fields.replace(' ', ""));
        }
        if let Some(link) = &self.entity_link {
            query.param("entityLink", link.as_str());
        }
        if let Some(include_all) = self.include_all_tests {
            query.param("includeAllTests", include_all.to_string());
        }
        if let Some(limit) = self.limit {
            query.param("limit", limit.to_string());
        }
        if let Some(include) = self.include {
            query.param("include", include.as_str());
        }
        query
    }
}

impl RestClient {
    pub async fn list_test_cases(
        &self,
        params: &ListTestCaseParams,
    ) -> Result<Paging<TestCase>, ApiClientError> {
        let path = params.to_query().append_to("/testCase");
        self.get_json(&path).await
    }
}
