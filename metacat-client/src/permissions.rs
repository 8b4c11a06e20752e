//! Permission resolution for page controllers.
//!
//! Controllers ask a `PermissionProvider` for the current user's capabilities
//! on one resource instance before fetching anything. The default capability
//! set grants nothing.

use crate::api::{ApiClientError, RestClient};
use async_trait::async_trait;
use metacat_core::{MetadataOperation, ResourceEntity, ResourcePermission};
use serde::Serialize;

/// Capabilities of the current user on one resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationPermission {
    pub view_all: bool,
    pub view_basic: bool,
    pub edit_all: bool,
    pub edit_description: bool,
    pub edit_display_name: bool,
    pub delete: bool,
    pub create: bool,
}

impl OperationPermission {
    /// Every capability granted.
    pub fn full() -> Self {
        Self {
            view_all: true,
            view_basic: true,
            edit_all: true,
            edit_description: true,
            edit_display_name: true,
            delete: true,
            create: true,
        }
    }

    pub fn can_view(&self) -> bool {
        self.view_all || self.view_basic
    }

    pub fn can_edit_description(&self) -> bool {
        self.edit_all || self.edit_description
    }

    pub fn can_edit_display_name(&self) -> bool {
        self.edit_all || self.edit_display_name
    }
}

impl From<&ResourcePermission> for OperationPermission {
    fn from(resource: &ResourcePermission) -> Self {
        Self {
            view_all: resource.allows(MetadataOperation::ViewAll),
            view_basic: resource.allows(MetadataOperation::ViewBasic),
            edit_all: resource.allows(MetadataOperation::EditAll),
            edit_description: resource.allows(MetadataOperation::EditDescription),
            edit_display_name: resource.allows(MetadataOperation::EditDisplayName),
            delete: resource.allows(MetadataOperation::Delete),
            create: resource.allows(MetadataOperation::Create),
        }
    }
}

#[async_trait]
pub trait PermissionProvider: Send + Sync {
    async fn entity_permission_by_fqn(
        &self,
        resource: ResourceEntity,
        fqn: &str,
    ) -> Result<OperationPermission, ApiClientError>;
}

/// Resolves permissions through `/permissions/{resource}/name/{fqn}`.
#[derive(Debug, Clone)]
pub struct ApiPermissionProvider {
    client: RestClient,
}

impl ApiPermissionProvider {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PermissionProvider for ApiPermissionProvider {
    async fn entity_permission_by_fqn(
        &self,
        resource: ResourceEntity,
        fqn: &str,
    ) -> Result<OperationPermission, ApiClientError> {
        let resolved = self.client.get_entity_permission_by_fqn(resource, fqn).await?;
        Ok(OperationPermission::from(&resolved))
    }
}
