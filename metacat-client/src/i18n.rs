//! Message lookup for user-visible labels.
//!
//! Keys follow the catalog UI's `namespace.key` scheme. Values may contain
//! `{{name}}` placeholders that are filled from the caller's parameters.

use std::collections::HashMap;

pub trait Localizer: Send + Sync {
    /// Resolve `key`, substituting `{{name}}` placeholders from `params`.
    /// Unknown keys resolve to the key itself.
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;

    fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("label.aborted", "Aborted"),
    ("label.bot-plural", "bots"),
    ("label.column-count", "Column Count"),
    ("label.column-plural", "Columns"),
    ("label.description", "Description"),
    ("label.display-name", "Display Name"),
    ("label.failed", "Failed"),
    ("label.passed", "Passed"),
    ("label.query-plural", "Queries"),
    ("label.row-count", "Row Count"),
    ("label.table-lowercase", "table"),
    ("label.table-sample", "Table Sample"),
    ("label.test-plural", "Tests"),
    ("label.type", "Type"),
    ("label.user", "user"),
    (
        "message.no-entity-available-with-name",
        "No {{entity}} available with name {{name}}",
    ),
    (
        "message.no-permission-to-view",
        "You do not have the necessary permissions to view this data.",
    ),
    (
        "message.no-profiler-enabled-summary-message",
        "Profiler is not enabled for this table.",
    ),
    (
        "api-error-messages.unexpected-error",
        "An unexpected error occurred.",
    ),
    (
        "server.entity-details-fetch-error",
        "Error while fetching details for {{entityType}} {{entityName}}",
    ),
    ("server.entity-fetch-error", "Error while fetching {{entity}}!"),
    ("server.entity-updating-error", "Error while updating {{entity}}!"),
    ("server.token-revoke-error", "Error while revoking token!"),
];

/// In-memory catalogue; ships with English.
#[derive(Debug, Clone)]
pub struct BundledLocalizer {
    locale: String,
    messages: HashMap<&'static str, &'static str>,
}

impl BundledLocalizer {
    pub fn english() -> Self {
        Self {
            locale: "en".to_string(),
            messages: ENGLISH.iter().copied().collect(),
        }
    }

    /// Catalogue for `locale`, falling back to English.
    pub fn for_locale(locale: &str) -> Self {
        if !locale.eq_ignore_ascii_case("en") {
            tracing::warn!(locale = %locale, "no bundled catalogue, using en");
        }
        Self::english()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for BundledLocalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for BundledLocalizer {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.messages.get(key).copied().unwrap_or(key);
        interpolate(template, params)
    }
}

/// Replace each `{{name}}` with its value. Placeholders without a value are
/// left as written.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match params.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        let i18n = BundledLocalizer::english();
        assert_eq!(i18n.t("label.row-count"), "Row Count");
    }

    #[test]
    fn test_unknown_key_is_echoed() {
        let i18n = BundledLocalizer::english();
        assert_eq!(i18n.t("label.does-not-exist"), "label.does-not-exist");
    }

    #[test]
    fn test_placeholders_substituted() {
        let i18n = BundledLocalizer::english();
        let text = i18n.translate(
            "server.entity-details-fetch-error",
            &[("entityType", "table"), ("entityName", "orders")],
        );
        assert_eq!(text, "Error while fetching details for table orders");
    }

    #[test]
    fn test_missing_param_left_in_place() {
        assert_eq!(
            interpolate("No {{entity}} named {{name}}", &[("name", "x")]),
            "No {{entity}} named x"
        );
        assert_eq!(interpolate("open {{ only", &[]), "open {{ only");
    }
}
