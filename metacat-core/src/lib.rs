//! Metacat Core - Entity Records
//!
//! Serde records mirroring the catalog server's JSON, the closed enums used at
//! ingestion boundaries, and the `Transport` contract every resource client
//! delegates to. This crate contains no HTTP code and no view logic.

pub mod classification;
pub mod common;
pub mod enums;
pub mod error;
pub mod identity;
pub mod permission;
pub mod table;
pub mod test_case;
pub mod transport;
pub mod user;

pub use classification::{Classification, CreateClassification, CreateTag, Tag};
pub use common::{EntityReference, Paging, PagingCursor};
pub use enums::{
    AuthType, EnumParseError, Include, JwtTokenExpiry, ResourceEntity, SsoServiceType, TableType,
    TestCaseStatus,
};
pub use error::{TransportError, TransportResult};
pub use identity::{EntityId, EntityLink, Timestamp};
pub use permission::{Access, MetadataOperation, Permission, ResourcePermission};
pub use table::{Column, Table, TableProfile, TableQuery};
pub use test_case::{TestCase, TestCaseResult};
pub use transport::{ApiRequest, Method, Transport};
pub use user::{AuthMechanismConfig, AuthenticationMechanism, Bot, SsoAuthConfig, User};
