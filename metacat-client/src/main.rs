//! Metacat command-line entry point.

use metacat_client::cli::{self, Command};
use metacat_client::config::ClientConfig;
use metacat_client::controllers::ControllerContext;
use metacat_client::error::ClientError;
use metacat_client::i18n::BundledLocalizer;
use metacat_client::notifications::TracingSink;
use metacat_client::permissions::ApiPermissionProvider;
use metacat_client::telemetry;
use metacat_client::RestClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    let config = ClientConfig::load()?;
    telemetry::init_tracing(&config.log)?;

    let command = Command::parse(std::env::args().skip(1))?;
    let client = RestClient::from_config(&config)?;
    let ctx = ControllerContext::new(
        client.clone(),
        Arc::new(ApiPermissionProvider::new(client)),
        Arc::new(TracingSink),
        Arc::new(BundledLocalizer::for_locale(&config.locale)),
    );

    let output = cli::run(command, &ctx).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
