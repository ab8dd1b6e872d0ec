//! Image hosting (imgbb) client module

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::errors::{BotError, describe_http_error};

const IMGBB_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

/// Turns raw image bytes into a public URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, image: &[u8]) -> Result<String, BotError>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: Option<String>,
}

/// Extracts `data.url` from an imgbb upload response body.
fn extract_image_url(body: &str) -> Result<String, BotError> {
    let parsed: UploadResponse = serde_json::from_str(body)
        .map_err(|e| BotError::UploadFailed(format!("invalid response: {e}")))?;

    parsed
        .data
        .and_then(|d| d.url)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| BotError::UploadFailed("response missing data.url".to_string()))
}

pub struct ImgbbUploader {
    http: Client,
    api_key: String,
    upload_url: String,
}

impl ImgbbUploader {
    #[must_use]
    pub fn new(http: Client, api_key: String) -> Self {
        Self::with_upload_url(http, api_key, IMGBB_UPLOAD_URL.to_string())
    }

    /// Same as [`ImgbbUploader::new`] but posting to `upload_url`.
    #[must_use]
    pub fn with_upload_url(http: Client, api_key: String, upload_url: String) -> Self {
        Self {
            http,
            api_key,
            upload_url,
        }
    }
}

#[async_trait]
impl ImageUploader for ImgbbUploader {
    async fn upload(&self, image: &[u8]) -> Result<String, BotError> {
        let encoded = STANDARD.encode(image);
        let form = [("key", self.api_key.as_str()), ("image", encoded.as_str())];

        let resp = self
            .http
            .post(&self.upload_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| BotError::UploadFailed(describe_http_error(&e)))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| BotError::UploadFailed(describe_http_error(&e)))?;

        if !status.is_success() {
            return Err(BotError::UploadFailed(format!("status={status} body={body}")));
        }

        let url = extract_image_url(&body)?;
        info!(size = image.len(), url = %url, "Uploaded image");
        Ok(url)
    }
}
