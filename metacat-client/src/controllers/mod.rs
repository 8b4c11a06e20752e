//! Page controllers.
//!
//! A controller resolves permissions, issues resource calls in sequence,
//! feeds the results through the view-model assemblers and exposes the
//! resulting state. Failures become notifications; nothing is retried.
//!
//! Every load begins a new `RequestGeneration`. The split `begin` / `fetch_*`
//! / `apply_*` methods let a caller run fetches outside the controller; an
//! `apply_*` call carrying a stale token is ignored and returns `false`.

pub mod bot_details;
pub mod table_summary;

pub use bot_details::{BotDetailsController, BotEdits, BotPageState};
pub use table_summary::TableSummaryController;

use crate::api::{ApiClientError, RestClient};
use crate::i18n::Localizer;
use crate::notifications::{Notification, NotificationSink};
use crate::patch::{JsonPatchDiff, StructuralDiff};
use crate::permissions::PermissionProvider;
use std::sync::Arc;

/// Collaborators shared by every controller.
#[derive(Clone)]
pub struct ControllerContext {
    pub client: RestClient,
    pub permissions: Arc<dyn PermissionProvider>,
    pub notifier: Arc<dyn NotificationSink>,
    pub localizer: Arc<dyn Localizer>,
    pub diff: Arc<dyn StructuralDiff>,
}

impl ControllerContext {
    pub fn new(
        client: RestClient,
        permissions: Arc<dyn PermissionProvider>,
        notifier: Arc<dyn NotificationSink>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            client,
            permissions,
            notifier,
            localizer,
            diff: Arc::new(JsonPatchDiff),
        }
    }

    pub fn with_diff(mut self, diff: Arc<dyn StructuralDiff>) -> Self {
        self.diff = diff;
        self
    }

    /// Toast for a failed call, preferring the server's message.
    pub(crate) fn show_error_toast(&self, err: &ApiClientError) {
        self.notifier.notify(Notification::error(err.user_message()));
    }

    pub(crate) fn show_error_message(&self, message: String) {
        self.notifier.notify(Notification::error(message));
    }
}

impl std::fmt::Debug for ControllerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerContext")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
