//! Table profile and query endpoints.

use super::{segment, ApiClientError, RestClient};
use metacat_core::{EntityId, Table};

impl RestClient {
    /// Table carrying its most recent `profile`.
    pub async fn get_latest_table_profile_by_fqn(&self, fqn: &str) -> Result<Table, ApiClientError> {
        let path = format!("/tables/{}/tableProfile/latest", segment(fqn));
        self.get_json(&path).await
    }

    /// Table carrying `tableQueries`.
    pub async fn get_table_queries_by_table_id(&self, id: EntityId) -> Result<Table, ApiClientError> {
        let path = format!("/tables/{}/tableQuery", id);
        self.get_json(&path).await
    }
}
