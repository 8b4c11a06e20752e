//! Classification and tag endpoints.

use super::query::{url_with_query_fields, QueryFields, QueryString};
use super::{segment, ApiClientError, RestClient};
use metacat_core::{Classification, CreateClassification, CreateTag, EntityId, Paging, Tag};
use serde::Serialize;

const CLASSIFICATIONS: &str = "/classifications";
const TAGS: &str = "/tags";

/// Query flags for entity deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    pub recursive: bool,
    pub hard_delete: bool,
}

impl DeleteOptions {
    /// Remove the entity and its children permanently.
    pub fn hard_recursive() -> Self {
        Self {
            recursive: true,
            hard_delete: true,
        }
    }

    fn append_to(&self, path: &str) -> String {
        let mut query = QueryString::new();
        query
            .param("recursive", self.recursive.to_string())
            .param("hardDelete", self.hard_delete.to_string());
        query.append_to(path)
    }
}

impl RestClient {
    pub async fn get_tags(&self, fields: Option<QueryFields>) -> Result<Paging<Tag>, ApiClientError> {
        let path = url_with_query_fields(TAGS, fields.as_ref());
        self.get_json(&path).await
    }

    pub async fn get_classifications(
        &self,
        fields: Option<QueryFields>,
    ) -> Result<Paging<Classification>, ApiClientError> {
        let path = url_with_query_fields(CLASSIFICATIONS, fields.as_ref());
        self.get_json(&path).await
    }

    pub async fn get_classification(
        &self,
        name: &str,
        fields: Option<QueryFields>,
    ) -> Result<Classification, ApiClientError> {
        let base = format!("{}/name/{}", CLASSIFICATIONS, segment(name));
        let path = url_with_query_fields(&base, fields.as_ref());
        self.get_json(&path).await
    }

    pub async fn delete_classification(&self, id: EntityId) -> Result<Classification, ApiClientError> {
        let path = format!("{}/{}", CLASSIFICATIONS, id);
        self.delete_json(&path).await
    }

    /// Permanently deletes the tag and anything under it.
    pub async fn delete_tag(&self, id: EntityId) -> Result<Tag, ApiClientError> {
        self.delete_tag_with(id, DeleteOptions::hard_recursive()).await
    }

    pub async fn delete_tag_with(
        &self,
        id: EntityId,
        options: DeleteOptions,
    ) -> Result<Tag, ApiClientError> {
        let path = options.append_to(&format!("{}/{}", TAGS, id));
        self.delete_json(&path).await
    }

    pub async fn create_classification(
        &self,
        payload: &CreateClassification,
    ) -> Result<Classification, ApiClientError> {
        self.post_json(CLASSIFICATIONS, payload).await
    }

    /// Whole-object PUT. The payload is sent as given, so any shape the
    /// server accepts (a fetched `Classification`, a create payload, or raw
    /// JSON carrying extra keys) passes through unchanged.
    pub async fn update_classification<B>(&self, payload: &B) -> Result<Classification, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        self.put_json(CLASSIFICATIONS, payload).await
    }

    pub async fn create_tag(&self, payload: &CreateTag) -> Result<Tag, ApiClientError> {
        self.post_json(TAGS, payload).await
    }

    /// Whole-object PUT; see `update_classification`.
    pub async fn update_tag<B>(&self, payload: &B) -> Result<Tag, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        self.put_json(TAGS, payload).await
    }
}
