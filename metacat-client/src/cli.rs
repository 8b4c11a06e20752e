//! `metacat` command parsing and execution.

use crate::api::QueryFields;
use crate::controllers::{BotDetailsController, ControllerContext, TableSummaryController};
use crate::error::ClientError;
use crate::view_model::bots::{jwt_token_expiry_options, token_expiry};
use chrono::Utc;
use metacat_core::Table;
use serde_json::{json, Value};

pub const USAGE: &str = "metacat [--config <path>] <tags [fields] | classification <name> | table-summary <fqn> | bot <name>>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tags { fields: Option<String> },
    Classification { name: String },
    TableSummary { fqn: String },
    Bot { name: String },
}

impl Command {
    /// Parse arguments (program name excluded); `--config <path>` is skipped.
    pub fn parse<I>(args: I) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--config" {
                args.next();
                continue;
            }
            positional.push(arg);
        }

        let mut positional = positional.into_iter();
        let command = positional.next().ok_or_else(usage)?;
        let argument = positional.next();
        match (command.as_str(), argument) {
            ("tags", fields) => Ok(Command::Tags { fields }),
            ("classification", Some(name)) => Ok(Command::Classification { name }),
            ("table-summary", Some(fqn)) => Ok(Command::TableSummary { fqn }),
            ("bot", Some(name)) => Ok(Command::Bot { name }),
            _ => Err(usage()),
        }
    }
}

fn usage() -> ClientError {
    ClientError::Usage(USAGE.to_string())
}

/// Run `command` and return its output document.
pub async fn run(command: Command, ctx: &ControllerContext) -> Result<Value, ClientError> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Tags { fields } => {
            let tags = ctx.client.get_tags(fields.map(QueryFields::from)).await?;
            Ok(serde_json::to_value(tags)?)
        }
        Command::Classification { name } => {
            let fields = QueryFields::from(["usageCount", "termCount"]);
            let classification = ctx.client.get_classification(&name, Some(fields)).await?;
            Ok(serde_json::to_value(classification)?)
        }
        Command::TableSummary { fqn } => {
            let fetched = ctx.client.get_latest_table_profile_by_fqn(&fqn).await?;
            // The controller fetches profile and queries itself.
            let table = Table {
                profile: None,
                table_queries: None,
                ..fetched
            };
            let mut controller = TableSummaryController::new(ctx.clone());
            controller.load(table).await;
            Ok(serde_json::to_value(controller.summary())?)
        }
        Command::Bot { name } => {
            let mut controller = BotDetailsController::new(ctx.clone());
            controller.load(&name).await;
            Ok(bot_document(&controller))
        }
    }
}

fn bot_document(controller: &BotDetailsController) -> Value {
    let expires_at = controller
        .bot_user()
        .and_then(|user| user.authentication_mechanism.as_ref())
        .and_then(|mechanism| mechanism.config.as_ref())
        .and_then(|config| config.jwt_token_expires_at);

    json!({
        "state": controller.state(),
        "permission": controller.permission(),
        "placeholder": controller.placeholder_message(),
        "bot": controller.bot(),
        "botUser": controller.bot_user(),
        "tokenExpiry": expires_at.map(|at| token_expiry(at, Utc::now())),
        "tokenExpiryOptions": jwt_token_expiry_options(),
    })
}
