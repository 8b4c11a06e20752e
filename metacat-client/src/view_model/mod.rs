//! Display-only aggregates derived from fetched entities.

pub mod bots;
pub mod table_summary;

pub use bots::{
    auth_mechanism_form_initial_values, auth_mechanism_type_options, jwt_token_expiry_options,
    token_expiry, token_expiry_text, AuthMechanismFormValues, AuthProviderConfig, SelectOption,
    TokenExpiry,
};
pub use table_summary::{
    merge_profile, overall_summary, tally_tests, BasicTableInfo, SummaryRow, TableSummaryView,
    TableTests, TestResultSummary,
};
