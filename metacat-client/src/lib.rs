//! Metacat client library.
//!
//! Resource clients for the catalog REST API, the view models derived from
//! fetched entities, and the page controllers that tie them together.

pub mod api;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod error;
pub mod format;
pub mod generation;
pub mod i18n;
pub mod notifications;
pub mod patch;
pub mod permissions;
pub mod telemetry;
pub mod view_model;

pub use api::{ApiClientError, RestClient};
pub use config::ClientConfig;
pub use error::ClientError;
