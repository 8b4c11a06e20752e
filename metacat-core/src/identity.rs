//! Identity types for catalog entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-assigned entity identifier.
pub type EntityId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Entity-link string binding a test case (or thread, or task) to an entity.
///
/// Rendered as `<#E::{entity_type}::{fqn}>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityLink(String);

impl EntityLink {
    pub const TABLE: &'static str = "table";

    pub fn new(entity_type: &str, fqn: &str) -> Self {
        Self(format!("<#E::{}::{}>", entity_type, fqn))
    }

    /// Link for a table by fully-qualified name.
    pub fn table(fqn: &str) -> Self {
        Self::new(Self::TABLE, fqn)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Entity FQN carried by the link, if the link is well formed.
    pub fn entity_fqn(&self) -> Option<&str> {
        let inner = self.0.strip_prefix("<#E::")?.strip_suffix('>')?;
        let (_, rest) = inner.split_once("::")?;
        // Column links carry a trailing `::columns::{name}` segment.
        Some(rest.split("::").next().unwrap_or(rest))
    }
}

impl fmt::Display for EntityLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_link_format() {
        let link = EntityLink::table("db.schema.tbl");
        assert_eq!(link.as_str(), "<#E::table::db.schema.tbl>");
    }

    #[test]
    fn test_entity_fqn_extracts_table_fqn() {
        let link = EntityLink::table("svc.db.schema.orders");
        assert_eq!(link.entity_fqn(), Some("svc.db.schema.orders"));
    }

    #[test]
    fn test_entity_fqn_ignores_column_suffix() {
        let link = EntityLink("<#E::table::svc.db.orders::columns::id>".to_string());
        assert_eq!(link.entity_fqn(), Some("svc.db.orders"));
    }

    #[test]
    fn test_entity_fqn_rejects_malformed() {
        let link = EntityLink("table::orders".to_string());
        assert_eq!(link.entity_fqn(), None);
    }
}
