//! Bot and user endpoints.

use super::query::{url_with_query_fields, QueryFields};
use super::{segment, ApiClientError, RestClient};
use crate::patch::PatchOperation;
use metacat_core::{Bot, EntityId, User};
use serde_json::{json, Value};

impl RestClient {
    /// Bot by name, with its `botUser` reference expanded.
    pub async fn get_bot_by_name(&self, name: &str) -> Result<Bot, ApiClientError> {
        let base = format!("/bots/name/{}", segment(name));
        let path = url_with_query_fields(&base, Some(&QueryFields::from("botUser")));
        self.get_json(&path).await
    }

    pub async fn get_user_by_name(
        &self,
        name: &str,
        fields: Option<QueryFields>,
    ) -> Result<User, ApiClientError> {
        let base = format!("/users/name/{}", segment(name));
        let path = url_with_query_fields(&base, fields.as_ref());
        self.get_json(&path).await
    }

    /// Apply a JSON patch to a bot.
    ///
    /// Returns the response body as sent, which may carry only some of the
    /// bot's fields; `Ok(None)` when the server answered successfully with an
    /// empty body.
    pub async fn update_bot_detail(
        &self,
        id: EntityId,
        patch: &[PatchOperation],
    ) -> Result<Option<Value>, ApiClientError> {
        let path = format!("/bots/{}", id);
        self.patch_entity(&path, patch).await
    }

    pub async fn update_user_detail(
        &self,
        id: EntityId,
        patch: &[PatchOperation],
    ) -> Result<Option<Value>, ApiClientError> {
        let path = format!("/users/{}", id);
        self.patch_entity(&path, patch).await
    }

    /// Invalidate the user's current JWT; returns the updated user.
    pub async fn revoke_user_token(&self, id: EntityId) -> Result<User, ApiClientError> {
        self.put_json("/users/revokeToken", &json!({ "id": id })).await
    }

    async fn patch_entity(
        &self,
        path: &str,
        patch: &[PatchOperation],
    ) -> Result<Option<Value>, ApiClientError> {
        let body = self.patch_raw(path, patch).await?;
        Ok((!is_empty_body(&body)).then_some(body))
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metacat_core::Method;
    use metacat_test_utils::{sample_bot, sample_user, to_json, ScriptedTransport};
    use std::sync::Arc;

    fn client() -> (RestClient, ScriptedTransport) {
        let transport = ScriptedTransport::new();
        (RestClient::new(Arc::new(transport.clone())), transport)
    }

    #[tokio::test]
    async fn test_get_bot_by_name_expands_bot_user() {
        let (client, transport) = client();
        let user = sample_user("ingestion-bot");
        transport.push_response(to_json(&sample_bot("ingestion-bot", &user)));

        let bot = client.get_bot_by_name("ingestion-bot").await.expect("bot");

        assert_eq!(bot.bot_user_fqn(), "ingestion-bot");
        assert_eq!(
            transport.paths(),
            vec!["/bots/name/ingestion-bot?fields=botUser".to_string()]
        );
    }

    #[tokio::test]
    async fn test_get_user_by_name_with_fields() {
        let (client, transport) = client();
        transport.push_response(to_json(&sample_user("ingestion-bot")));

        client
            .get_user_by_name("ingestion-bot", Some("authenticationMechanism".into()))
            .await
            .expect("user");

        assert_eq!(
            transport.paths(),
            vec!["/users/name/ingestion-bot?fields=authenticationMechanism".to_string()]
        );
    }

    #[tokio::test]
    async fn test_update_bot_sends_patch_list() {
        let (client, transport) = client();
        let user = sample_user("ingestion-bot");
        let bot = sample_bot("ingestion-bot", &user);
        transport.push_response(to_json(&bot));
        let patch = vec![PatchOperation::Replace {
            path: "/description".to_string(),
            value: json!("new"),
        }];

        let updated = client.update_bot_detail(bot.id, &patch).await.expect("patch");

        assert_eq!(updated, Some(to_json(&bot)));
        let request = transport.last_request().expect("request");
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.path, format!("/bots/{}", bot.id));
        assert_eq!(
            request.body,
            Some(json!([{ "op": "replace", "path": "/description", "value": "new" }]))
        );
    }

    #[tokio::test]
    async fn test_empty_patch_response_is_none() {
        let (client, transport) = client();
        transport.push_response(Value::Null);
        transport.push_response(json!(""));

        let id = uuid::Uuid::new_v4();
        assert_eq!(client.update_bot_detail(id, &[]).await.expect("patch"), None);
        assert_eq!(client.update_user_detail(id, &[]).await.expect("patch"), None);
    }

    #[tokio::test]
    async fn test_revoke_token_puts_id() {
        let (client, transport) = client();
        let user = sample_user("ingestion-bot");
        transport.push_response(to_json(&user));

        let revoked = client.revoke_user_token(user.id).await.expect("revoke");

        assert_eq!(revoked.id, user.id);
        let request = transport.last_request().expect("request");
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/users/revokeToken");
        assert_eq!(request.body, Some(json!({ "id": user.id })));
    }
}
