//! Tracing subscriber setup for the `metacat` binary.

use crate::config::LogConfig;
use crate::error::ClientError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "metacat_client=debug,info";

/// Filter from config, else `RUST_LOG`, else `DEFAULT_FILTER`.
fn env_filter(config: &LogConfig) -> Result<EnvFilter, ClientError> {
    match &config.filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| ClientError::Telemetry(format!("Invalid log filter: {}", e))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// command output.
pub fn init_tracing(config: &LogConfig) -> Result<(), ClientError> {
    let filter = env_filter(config)?;
    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| ClientError::Telemetry(format!("Failed to init subscriber: {}", e)))?;

    tracing::debug!(json = config.json, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_is_used() {
        let config = LogConfig {
            filter: Some("metacat_client=trace".to_string()),
            json: false,
        };
        let filter = env_filter(&config).expect("filter");
        assert!(filter.to_string().contains("metacat_client=trace"));
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = LogConfig {
            filter: Some("metacat_client=loudest".to_string()),
            json: false,
        };
        assert!(matches!(env_filter(&config), Err(ClientError::Telemetry(_))));
    }
}
