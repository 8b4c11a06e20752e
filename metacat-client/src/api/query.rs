//! URL composition helpers.

/// Field selection for `?fields=`; a single string or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFields(Vec<String>);

impl QueryFields {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Comma-joined fields with spaces stripped.
    pub fn joined(&self) -> String {
        self.0.join(",").replace(' ', "")
    }

    pub fn is_empty(&self) -> bool {
        self.joined().is_empty()
    }
}

impl From<&str> for QueryFields {
    fn from(fields: &str) -> Self {
        Self(vec![fields.to_string()])
    }
}

impl From<String> for QueryFields {
    fn from(fields: String) -> Self {
        Self(vec![fields])
    }
}

impl From<&[&str]> for QueryFields {
    fn from(fields: &[&str]) -> Self {
        Self::new(fields.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for QueryFields {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields)
    }
}

impl From<Vec<String>> for QueryFields {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

/// `path` plus `?fields=a,b` when fields are present and non-empty.
pub fn url_with_query_fields(path: &str, fields: Option<&QueryFields>) -> String {
    let mut query = QueryString::new();
    if let Some(fields) = fields {
        let joined = fields.joined();
        if !joined.is_empty() {
            query.raw("fields", joined);
        }
    }
    query.append_to(path)
}

/// Ordered query parameters; values are percent-encoded except those added
/// with `raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(&mut self, key: &str, value: impl AsRef<str>) -> &mut Self {
        self.pairs.push((
            key.to_string(),
            urlencoding::encode(value.as_ref()).into_owned(),
        ));
        self
    }

    /// Field lists stay readable (`a,b`), matching the server's examples.
    pub fn raw(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn append_to(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let encoded = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", path, separator, encoded)
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty field list yields exactly `?fields=` + comma join.
        #[test]
        fn prop_fields_join_with_comma(fields in prop::collection::vec("[a-zA-Z]{1,10}", 1..6)) {
            let expected = format!("/tags?fields={}", fields.join(","));
            let query_fields = QueryFields::from(fields);
            prop_assert_eq!(url_with_query_fields("/tags", Some(&query_fields)), expected);
        }
    }
}
