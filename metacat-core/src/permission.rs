//! Permission records returned by the permission-resolution service.

use serde::{Deserialize, Serialize};

/// Operation a permission entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataOperation {
    All,
    ViewAll,
    ViewBasic,
    EditAll,
    EditDescription,
    EditDisplayName,
    EditOwner,
    EditTags,
    Create,
    Delete,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Access {
    Allow,
    Deny,
    ConditionalAllow,
    ConditionalDeny,
    NotAllow,
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow | Access::ConditionalAllow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub operation: MetadataOperation,
    pub access: Access,
}

/// Permissions of the current user on one resource instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePermission {
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl ResourcePermission {
    /// Whether `operation` is allowed, directly or through `All`.
    ///
    /// An explicit deny on the operation wins over a wildcard allow.
    pub fn allows(&self, operation: MetadataOperation) -> bool {
        let direct = self
            .permissions
            .iter()
            .find(|p| p.operation == operation)
            .map(|p| p.access.is_allowed());
        match direct {
            Some(allowed) => allowed,
            None => self
                .permissions
                .iter()
                .any(|p| p.operation == MetadataOperation::All && p.access.is_allowed()),
        }
    }
}
