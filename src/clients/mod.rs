//! Client modules for external API interactions

pub mod form_builder;
pub mod image_host;

pub use form_builder::{AppsScriptClient, FormLinks, FormService};
pub use image_host::{ImageUploader, ImgbbUploader};

use std::time::Duration;

use reqwest::Client;

use crate::errors::BotError;

/// Builds the HTTP client shared by every outbound call. All requests are
/// bounded by `timeout`.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_http_client(timeout: Duration) -> Result<Client, BotError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| BotError::ConfigError(format!("http client: {e}")))
}
