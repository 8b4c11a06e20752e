use metacat_client::i18n::BundledLocalizer;
use metacat_client::patch::{compare, PatchOperation};
use metacat_client::view_model::table_summary::{tally_tests, TableSummaryView};
use metacat_test_utils::generators::{arb_table, arb_test_case};
use metacat_test_utils::sample_profile;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn tally_only_counts_matching_tests(
        cases in prop::collection::vec(
            arb_test_case(vec![
                "db.schema.orders".to_string(),
                "db.schema.orders_v2".to_string(),
            ]),
            0..40,
        )
    ) {
        let expected = cases
            .iter()
            .filter(|case| case.belongs_to("db.schema.orders"))
            .count();
        let tests = tally_tests("db.schema.orders", cases);
        prop_assert_eq!(tests.tests.len(), expected);
        prop_assert_eq!(tests.results.total(), expected);
    }

    #[test]
    fn summary_rows_follow_profile(table in arb_table(), rows in 0u64..10_000_000) {
        let i18n = BundledLocalizer::english();
        let tests = tally_tests(table.fqn(), Vec::new());

        let bare = TableSummaryView::assemble(&table, &tests, &i18n);
        prop_assert!(bare.overall_summary.is_none());
        prop_assert!(bare.no_profiler_message.is_some());

        let mut profiled = table.clone();
        profiled.profile = Some(sample_profile(rows, table.columns.len() as u64, None));
        let view = TableSummaryView::assemble(&profiled, &tests, &i18n);
        let summary = view.overall_summary.expect("rows");
        prop_assert_eq!(summary.len(), 6);
        prop_assert_eq!(summary[0].value.replace(',', ""), rows.to_string());
        prop_assert!(view.no_profiler_message.is_none());
    }

    #[test]
    fn identical_documents_produce_no_patch(name in "[a-z]{1,12}", n in 0i64..1000) {
        let doc = json!({ "name": name, "nested": { "n": n, "list": [n, n + 1] } });
        prop_assert!(compare(&doc, &doc).is_empty());
    }
}

#[test]
fn description_edit_becomes_single_replace() {
    let old = json!({ "name": "bot", "description": "old" });
    let new = json!({ "name": "bot", "description": "new" });
    assert_eq!(
        compare(&old, &new),
        vec![PatchOperation::Replace {
            path: "/description".to_string(),
            value: json!("new"),
        }]
    );
}
