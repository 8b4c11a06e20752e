//! Permission resolution endpoint.

use super::{segment, ApiClientError, RestClient};
use metacat_core::{ResourceEntity, ResourcePermission};

impl RestClient {
    pub async fn get_entity_permission_by_fqn(
        &self,
        resource: ResourceEntity,
        fqn: &str,
    ) -> Result<ResourcePermission, ApiClientError> {
        let path = format!("/permissions/{}/name/{}", resource, segment(fqn));
        self.get_json(&path).await
    }
}
