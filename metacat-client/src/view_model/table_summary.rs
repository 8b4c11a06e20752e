//! Table summary view model.
//!
//! Derived wholesale from a table snapshot, its latest profile and its test
//! cases; nothing here is persisted or mutated in place.

use crate::format::{form_two_digit_number, format_number_with_comma, format_sample_percentage};
use crate::i18n::Localizer;
use metacat_core::{Column, Table, TableProfile, TableQuery, TableType, TestCase, TestCaseStatus};
use serde::Serialize;

// ============================================================================
// TEST TALLY
// ============================================================================

/// Per-status test counts. Every test case lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestResultSummary {
    pub success: usize,
    pub aborted: usize,
    pub failed: usize,
    pub queued: usize,
    /// Missing or unrecognized statuses.
    pub unknown: usize,
}

impl TestResultSummary {
    pub fn record(&mut self, status: Option<&TestCaseStatus>) {
        match status {
            Some(TestCaseStatus::Success) => self.success += 1,
            Some(TestCaseStatus::Aborted) => self.aborted += 1,
            Some(TestCaseStatus::Failed) => self.failed += 1,
            Some(TestCaseStatus::Queued) => self.queued += 1,
            Some(TestCaseStatus::Unknown(_)) | None => self.unknown += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.aborted + self.failed + self.queued + self.unknown
    }
}

/// Test cases retained for one table, with their tally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableTests {
    pub tests: Vec<TestCase>,
    pub results: TestResultSummary,
}

/// Keep the test cases whose `entityFQN` equals `fqn` exactly and tally them.
///
/// The server filter matches on entity link prefix, so column-level tests of
/// the same table and tests of similarly named tables come back too.
pub fn tally_tests(fqn: &str, cases: Vec<TestCase>) -> TableTests {
    let mut table_tests = TableTests::default();
    for case in cases.into_iter().filter(|case| case.belongs_to(fqn)) {
        table_tests.results.record(case.status());
        table_tests.tests.push(case);
    }
    table_tests
}

// ============================================================================
// PROFILE MERGE
// ============================================================================

/// Copy of `base` carrying the fetched profile and queries.
pub fn merge_profile(
    base: &Table,
    profile: Option<TableProfile>,
    table_queries: Option<Vec<TableQuery>>,
) -> Table {
    Table {
        profile,
        table_queries,
        ..base.clone()
    }
}

// ============================================================================
// ROWS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'static str>,
}

impl SummaryRow {
    fn new(title: String, value: String) -> Self {
        Self {
            title,
            value,
            class_name: None,
        }
    }

    fn with_class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }
}

/// Profile and test rows, or `None` when no profile has been fetched.
pub fn overall_summary(
    table: &Table,
    tests: &TestResultSummary,
    i18n: &dyn Localizer,
) -> Option<Vec<SummaryRow>> {
    let profile = table.profile.as_ref()?;
    let tests_label = i18n.t("label.test-plural");

    let column_count = profile
        .column_count
        .unwrap_or(table.columns.len() as u64);

    Some(vec![
        SummaryRow::new(
            i18n.t("label.row-count"),
            format_number_with_comma(profile.row_count.unwrap_or(0)),
        ),
        SummaryRow::new(i18n.t("label.column-count"), column_count.to_string()),
        SummaryRow::new(
            format!("{} %", i18n.t("label.table-sample")),
            format_sample_percentage(profile.profile_sample),
        ),
        SummaryRow::new(
            format!("{} {}", tests_label, i18n.t("label.passed")),
            form_two_digit_number(tests.success),
        )
        .with_class("success"),
        SummaryRow::new(
            format!("{} {}", tests_label, i18n.t("label.aborted")),
            form_two_digit_number(tests.aborted),
        )
        .with_class("aborted"),
        SummaryRow::new(
            format!("{} {}", tests_label, i18n.t("label.failed")),
            form_two_digit_number(tests.failed),
        )
        .with_class("failed"),
    ])
}

// ============================================================================
// BASIC INFO
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasicTableInfo {
    #[serde(rename = "Type")]
    pub table_type: TableType,
    pub queries: String,
    pub columns: String,
}

impl BasicTableInfo {
    pub fn from_table(table: &Table) -> Self {
        Self {
            table_type: table.table_type.unwrap_or_default(),
            queries: count_or_dash(table.table_queries.as_ref().map_or(0, Vec::len)),
            columns: count_or_dash(table.columns.len()),
        }
    }

    /// Label/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, String); 3] {
        [
            ("Type", self.table_type.to_string()),
            ("Queries", self.queries.clone()),
            ("Columns", self.columns.clone()),
        ]
    }
}

fn count_or_dash(count: usize) -> String {
    if count == 0 {
        "-".to_string()
    } else {
        count.to_string()
    }
}

// ============================================================================
// VIEW
// ============================================================================

/// Everything the summary panel renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummaryView {
    pub name: String,
    pub fully_qualified_name: String,
    pub basic_info: BasicTableInfo,
    pub overall_summary: Option<Vec<SummaryRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_profiler_message: Option<String>,
    pub test_results: TestResultSummary,
    pub columns: Vec<Column>,
}

impl TableSummaryView {
    pub fn assemble(table: &Table, tests: &TableTests, i18n: &dyn Localizer) -> Self {
        let overall_summary = overall_summary(table, &tests.results, i18n);
        let no_profiler_message = overall_summary
            .is_none()
            .then(|| i18n.t("message.no-profiler-enabled-summary-message"));
        Self {
            name: table.name.clone(),
            fully_qualified_name: table.fqn().to_string(),
            basic_info: BasicTableInfo::from_table(table),
            overall_summary,
            no_profiler_message,
            test_results: tests.results,
            columns: table.columns.clone(),
        }
    }
}
