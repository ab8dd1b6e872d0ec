//! LINE Messaging API client module
//!
//! Fetches uploaded message content and sends replies through reply tokens.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::errors::BotError;

const API_BASE: &str = "https://api.line.me";
const DATA_API_BASE: &str = "https://api-data.line.me";

/// LINE's per-message character limit for text messages.
pub const MAX_TEXT_LENGTH: usize = 5_000;

/// The messaging-platform operations the dispatcher needs.
#[async_trait]
pub trait MessagingApi: Send + Sync {
    /// Downloads the binary content of an image (or other media) message.
    async fn get_message_content(&self, message_id: &str) -> Result<Vec<u8>, BotError>;

    /// Sends one text reply. Each reply token can be used once.
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), BotError>;
}

/// Build the JSON payload for the reply endpoint, truncating `text` to
/// [`MAX_TEXT_LENGTH`] characters.
#[must_use]
pub fn build_reply_payload(reply_token: &str, text: &str) -> Value {
    let text: String = text.chars().take(MAX_TEXT_LENGTH).collect();
    json!({
        "replyToken": reply_token,
        "messages": [
            { "type": "text", "text": text }
        ]
    })
}

/// LINE Messaging API client authenticated with a channel access token.
pub struct LineClient {
    http: Client,
    access_token: String,
    api_base: String,
    data_api_base: String,
}

impl LineClient {
    #[must_use]
    pub fn new(http: Client, access_token: String) -> Self {
        Self::with_base_urls(
            http,
            access_token,
            API_BASE.to_string(),
            DATA_API_BASE.to_string(),
        )
    }

    /// Points the client at other hosts. `api_base` serves replies and
    /// `data_api_base` serves message content.
    #[must_use]
    pub fn with_base_urls(
        http: Client,
        access_token: String,
        api_base: String,
        data_api_base: String,
    ) -> Self {
        Self {
            http,
            access_token,
            api_base: api_base.trim_end_matches('/').to_string(),
            data_api_base: data_api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MessagingApi for LineClient {
    async fn get_message_content(&self, message_id: &str) -> Result<Vec<u8>, BotError> {
        let resp = self
            .http
            .get(format!(
                "{}/v2/bot/message/{message_id}/content",
                self.data_api_base
            ))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(BotError::ApiError(format!(
                "message content fetch failed: status={status} body={body_text}"
            )));
        }

        let bytes = resp.bytes().await?;
        info!(message_id, size = bytes.len(), "Fetched message content");
        Ok(bytes.to_vec())
    }

    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), BotError> {
        let payload = build_reply_payload(reply_token, text);
        let resp = self
            .http
            .post(format!("{}/v2/bot/message/reply", self.api_base))
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            warn!("reply failed: status={} body={}", status, body_text);
            return Err(BotError::ApiError(format!(
                "reply failed: status={status} body={body_text}"
            )));
        }

        Ok(())
    }
}
