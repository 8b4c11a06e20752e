//! Bot details page controller.

use super::ControllerContext;
use crate::api::ApiClientError;
use crate::error::ClientError;
use crate::generation::{GenerationToken, RequestGeneration};
use crate::patch::merge_response;
use crate::permissions::OperationPermission;
use metacat_core::{Bot, ResourceEntity, User};
use serde::Serialize;

/// Keys a PATCH response may not overwrite locally.
const IDENTITY_FIELDS: &[&str] = &["id", "fullyQualifiedName"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BotPageState {
    Loading,
    Error,
    Unauthorized,
    Ready,
}

/// Local edits to a bot. Identity fields are not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotEdits {
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl BotEdits {
    fn apply_to(&self, bot: &Bot) -> Bot {
        let mut updated = bot.clone();
        if let Some(display_name) = &self.display_name {
            updated.display_name = Some(display_name.clone());
        }
        if let Some(description) = &self.description {
            updated.description = Some(description.clone());
        }
        updated
    }
}

#[derive(Debug)]
pub struct BotDetailsController {
    ctx: ControllerContext,
    bots_name: String,
    permission: OperationPermission,
    bot: Option<Bot>,
    bot_user: Option<User>,
    state: BotPageState,
    generation: RequestGeneration,
}

impl BotDetailsController {
    pub fn new(ctx: ControllerContext) -> Self {
        Self {
            ctx,
            bots_name: String::new(),
            permission: OperationPermission::default(),
            bot: None,
            bot_user: None,
            state: BotPageState::Loading,
            generation: RequestGeneration::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn state(&self) -> BotPageState {
        self.state
    }

    pub fn bots_name(&self) -> &str {
        &self.bots_name
    }

    pub fn permission(&self) -> OperationPermission {
        self.permission
    }

    pub fn bot(&self) -> Option<&Bot> {
        self.bot.as_ref()
    }

    pub fn bot_user(&self) -> Option<&User> {
        self.bot_user.as_ref()
    }

    /// Text shown instead of the details for the error and unauthorized
    /// states.
    pub fn placeholder_message(&self) -> Option<String> {
        let i18n = &self.ctx.localizer;
        match self.state {
            BotPageState::Error => {
                let entity = i18n.t("label.bot-plural");
                Some(i18n.translate(
                    "message.no-entity-available-with-name",
                    &[("entity", entity.as_str()), ("name", self.bots_name.as_str())],
                ))
            }
            BotPageState::Unauthorized => Some(i18n.t("message.no-permission-to-view")),
            BotPageState::Loading | BotPageState::Ready => None,
        }
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// Resolve permissions for `bots_name` and, when viewable, fetch the bot
    /// and its user.
    pub async fn load(&mut self, bots_name: &str) {
        let token = self.begin(bots_name);
        let permission = self.resolve_permission().await;
        if !self.apply_permission(token, permission) {
            return;
        }
        if self.permission.can_view() {
            let data = self.fetch_bot_data().await;
            self.apply_bot_data(token, data);
        }
    }

    /// Re-fetch the bot and its user, e.g. after the bot user's email changed.
    pub async fn refresh(&mut self) {
        if !self.permission.can_view() {
            return;
        }
        let token = self.generation.current();
        let data = self.fetch_bot_data().await;
        self.apply_bot_data(token, data);
    }

    /// Start a new load for `bots_name`, discarding state and invalidating
    /// in-flight fetches.
    pub fn begin(&mut self, bots_name: &str) -> GenerationToken {
        self.bots_name = bots_name.to_string();
        self.permission = OperationPermission::default();
        self.bot = None;
        self.bot_user = None;
        self.state = BotPageState::Loading;
        self.generation.begin()
    }

    pub async fn resolve_permission(&self) -> Result<OperationPermission, ApiClientError> {
        self.ctx
            .permissions
            .entity_permission_by_fqn(ResourceEntity::Bot, &self.bots_name)
            .await
    }

    /// A failed resolution keeps the default permission, which grants
    /// nothing.
    pub fn apply_permission(
        &mut self,
        token: GenerationToken,
        result: Result<OperationPermission, ApiClientError>,
    ) -> bool {
        if !self.generation.is_current(token) {
            tracing::debug!(bot = %self.bots_name, generation = token.value(), "dropping stale permission result");
            return false;
        }
        match result {
            Ok(permission) => self.permission = permission,
            Err(err) => {
                tracing::warn!(bot = %self.bots_name, error = %err, "permission resolution failed");
                self.ctx.show_error_toast(&err);
                self.permission = OperationPermission::default();
            }
        }
        if !self.permission.can_view() {
            self.state = BotPageState::Unauthorized;
        }
        true
    }

    /// Bot by name, then its user by the bot user's FQN.
    pub async fn fetch_bot_data(&self) -> Result<(Bot, User), ApiClientError> {
        let bot = self.ctx.client.get_bot_by_name(&self.bots_name).await?;
        let user = self
            .ctx
            .client
            .get_user_by_name(bot.bot_user_fqn(), None)
            .await?;
        Ok((bot, user))
    }

    pub fn apply_bot_data(
        &mut self,
        token: GenerationToken,
        result: Result<(Bot, User), ApiClientError>,
    ) -> bool {
        if !self.generation.is_current(token) {
            tracing::debug!(bot = %self.bots_name, generation = token.value(), "dropping stale bot data");
            return false;
        }
        match result {
            Ok((bot, user)) => {
                self.bot = Some(bot);
                self.bot_user = Some(user);
                self.state = BotPageState::Ready;
            }
            Err(err) => {
                tracing::warn!(bot = %self.bots_name, error = %err, "failed to fetch bot");
                self.ctx.show_error_toast(&err);
                self.state = BotPageState::Error;
            }
        }
        true
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Send the difference between the loaded bot and `edits` as a patch.
    /// Each edited field needs the matching edit permission.
    ///
    /// The response is merged over the edited bot key by key, so fields the
    /// server leaves out keep their local value. An empty success body is
    /// reported as an unexpected error and leaves the loaded bot unchanged.
    pub async fn update_bot_details(&mut self, edits: &BotEdits) -> Result<(), ClientError> {
        let current = self.bot.as_ref().ok_or(ClientError::NotLoaded { entity: "bot" })?;
        if edits.display_name.is_some() && !self.permission.can_edit_display_name() {
            return Err(ClientError::PermissionDenied {
                operation: "edit display name",
            });
        }
        if edits.description.is_some() && !self.permission.can_edit_description() {
            return Err(ClientError::PermissionDenied {
                operation: "edit description",
            });
        }
        let updated = edits.apply_to(current);
        let patch = self.ctx.diff.json_patch_diff(
            &serde_json::to_value(current)?,
            &serde_json::to_value(&updated)?,
        );
        let id = current.id;

        match self.ctx.client.update_bot_detail(id, &patch).await {
            Ok(Some(response)) => {
                let merged = merge_response(&updated, &response, IDENTITY_FIELDS)?;
                self.bot = Some(merged);
                Ok(())
            }
            Ok(None) => {
                self.ctx
                    .show_error_message(self.ctx.localizer.t("api-error-messages.unexpected-error"));
                Err(ClientError::UnexpectedEmptyResponse {
                    path: format!("/bots/{}", id),
                })
            }
            Err(err) => {
                self.ctx.show_error_toast(&err);
                Err(err.into())
            }
        }
    }

    /// Revoke the bot user's token and keep the returned user.
    pub async fn revoke_token(&mut self) -> Result<(), ClientError> {
        let user_id = self
            .bot_user
            .as_ref()
            .map(|user| user.id)
            .ok_or(ClientError::NotLoaded { entity: "bot user" })?;

        match self.ctx.client.revoke_user_token(user_id).await {
            Ok(user) => {
                self.bot_user = Some(user);
                Ok(())
            }
            Err(err) => {
                self.ctx.show_error_toast(&err);
                Err(err.into())
            }
        }
    }
}
