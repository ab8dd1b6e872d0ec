//! Webhook entry point - verifies the delivery, then hands each event to
//! `event_handler`.
//!
//! This module handles:
//! - Signature verification (`X-Line-Signature`)
//! - Envelope decoding
//! - Sequential per-event dispatch
//! - The API Gateway payload shape used by the Lambda front end

use std::borrow::Cow;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{event_handler, helpers, parsing, signature};
use crate::clients::{self, AppsScriptClient, FormService, ImageUploader, ImgbbUploader};
use crate::core::config::AppConfig;
use crate::core::image_cache::ImageCache;
use crate::errors::BotError;
use crate::line::{LineClient, MessagingApi};

/// Status and body answered to the platform for one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: &'static str,
}

impl WebhookResponse {
    pub const OK: Self = Self {
        status: 200,
        body: "OK",
    };
    pub const INVALID_SIGNATURE: Self = Self {
        status: 400,
        body: "Invalid signature",
    };
}

/// Routes webhook deliveries to the collaborators. Cheap to clone; clones
/// share the image cache and clients.
#[derive(Clone)]
pub struct Dispatcher {
    channel_secret: Arc<str>,
    pub(crate) cache: ImageCache,
    pub(crate) messaging: Arc<dyn MessagingApi>,
    pub(crate) uploader: Arc<dyn ImageUploader>,
    pub(crate) forms: Arc<dyn FormService>,
}

impl Dispatcher {
    pub fn new(
        channel_secret: &str,
        cache: ImageCache,
        messaging: Arc<dyn MessagingApi>,
        uploader: Arc<dyn ImageUploader>,
        forms: Arc<dyn FormService>,
    ) -> Self {
        Self {
            channel_secret: Arc::from(channel_secret),
            cache,
            messaging,
            uploader,
            forms,
        }
    }

    /// Wires the production clients from configuration, sharing one HTTP
    /// client bounded by `config.outbound_timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        let http = clients::build_http_client(config.outbound_timeout)?;

        Ok(Self::new(
            &config.line_channel_secret,
            ImageCache::new(),
            Arc::new(LineClient::new(
                http.clone(),
                config.line_channel_access_token.clone(),
            )),
            Arc::new(ImgbbUploader::new(http.clone(), config.imgbb_api_key.clone())),
            Arc::new(AppsScriptClient::new(
                http,
                config.form_builder_url.clone(),
                config.participant_query_url.clone(),
            )),
        ))
    }

    #[must_use]
    pub fn image_cache(&self) -> &ImageCache {
        &self.cache
    }

    fn check_signature(&self, header: Option<&str>, body: &str) -> Result<(), BotError> {
        let Some(sig) = header else {
            error!("Missing {} header", signature::SIGNATURE_HEADER);
            return Err(BotError::SignatureInvalid);
        };

        if signature::verify_line_signature(body, sig, &self.channel_secret) {
            Ok(())
        } else {
            Err(BotError::SignatureInvalid)
        }
    }

    /// Handles one webhook delivery.
    ///
    /// Answers 400 when the signature is missing or wrong and does nothing
    /// else. Once the signature passes the answer is always 200: failures
    /// inside an event become chat replies, so the platform never redelivers.
    #[tracing::instrument(level = "info", skip_all, fields(delivery_id = %Uuid::new_v4()))]
    pub async fn handle_webhook(&self, signature: Option<&str>, body: &str) -> WebhookResponse {
        if let Err(e) = self.check_signature(signature, body) {
            warn!("Rejecting delivery: {}", e);
            return WebhookResponse::INVALID_SIGNATURE;
        }

        let envelope = match parsing::decode_envelope(body) {
            Ok(envelope) => envelope,
            Err(e) => {
                error!("{}", e);
                return WebhookResponse::OK;
            }
        };

        info!(event_count = envelope.events.len(), "Signature verified");

        for event in &envelope.events {
            event_handler::handle_event(self, event).await;
        }

        WebhookResponse::OK
    }
}

/// Handles an API Gateway proxy payload (`{headers, body, isBase64Encoded}`)
/// and returns the matching `{statusCode, body}` response.
pub async fn handle_gateway_event(dispatcher: &Dispatcher, payload: &Value) -> Value {
    let Some(headers) = payload.get("headers") else {
        error!("Request missing headers");
        return helpers::err_response(400, "Missing headers");
    };

    let body = match extract_body(payload) {
        Ok(b) => b,
        Err(response) => return response,
    };

    let sig = parsing::get_header_value(headers, signature::SIGNATURE_HEADER);
    let response = dispatcher.handle_webhook(sig, &body).await;

    helpers::text_response(response.status, response.body)
}

fn extract_body(payload: &Value) -> Result<Cow<'_, str>, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(Cow::Borrowed(body_str));
    }

    STANDARD
        .decode(body_str)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .map(Cow::Owned)
        .ok_or_else(|| {
            error!("Request body is not valid base64 UTF-8");
            helpers::err_response(400, "Invalid body encoding")
        })
}
