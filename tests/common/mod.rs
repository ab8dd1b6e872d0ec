//! In-memory stand-ins for the external collaborators.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formbot::BotError;
use formbot::Dispatcher;
use formbot::api::signature::compute_signature;
use formbot::clients::{FormLinks, FormService, ImageUploader};
use formbot::core::image_cache::ImageCache;
use formbot::core::models::EventDefinition;
use formbot::line::MessagingApi;

pub const SECRET: &str = "test-channel-secret";

#[derive(Default)]
pub struct FakeMessaging {
    pub replies: Mutex<Vec<(String, String)>>,
    pub fail_content: bool,
}

impl FakeMessaging {
    pub fn replies(&self) -> Vec<(String, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingApi for FakeMessaging {
    async fn get_message_content(&self, message_id: &str) -> Result<Vec<u8>, BotError> {
        if self.fail_content {
            return Err(BotError::ApiError("content unavailable".to_string()));
        }
        Ok(format!("bytes-of-{message_id}").into_bytes())
    }

    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), BotError> {
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_string(), text.to_string()));
        Ok(())
    }
}

pub struct FakeUploader {
    pub url: Option<String>,
}

#[async_trait]
impl ImageUploader for FakeUploader {
    async fn upload(&self, _image: &[u8]) -> Result<String, BotError> {
        self.url
            .clone()
            .ok_or_else(|| BotError::UploadFailed("status=400 body=bad key".to_string()))
    }
}

#[derive(Default)]
pub struct FakeForms {
    pub links: Option<FormLinks>,
    pub participants: Option<Vec<String>>,
    pub created: Mutex<Vec<EventDefinition>>,
    pub queried: Mutex<Vec<String>>,
}

impl FakeForms {
    pub fn created(&self) -> Vec<EventDefinition> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormService for FakeForms {
    async fn create_form(&self, definition: &EventDefinition) -> Result<FormLinks, BotError> {
        self.created.lock().unwrap().push(definition.clone());
        self.links
            .clone()
            .ok_or_else(|| BotError::FormBuildFailed("HTTP status server error (500)".to_string()))
    }

    async fn list_participants(&self, title: &str) -> Result<Vec<String>, BotError> {
        self.queried.lock().unwrap().push(title.to_string());
        self.participants
            .clone()
            .ok_or_else(|| BotError::QueryFailed("timed out".to_string()))
    }
}

pub struct Harness {
    pub dispatcher: Dispatcher,
    pub messaging: Arc<FakeMessaging>,
    pub forms: Arc<FakeForms>,
}

pub fn harness(messaging: FakeMessaging, uploader: FakeUploader, forms: FakeForms) -> Harness {
    let messaging = Arc::new(messaging);
    let forms = Arc::new(forms);
    let dispatcher = Dispatcher::new(
        SECRET,
        ImageCache::new(),
        messaging.clone(),
        Arc::new(uploader),
        forms.clone(),
    );
    Harness {
        dispatcher,
        messaging,
        forms,
    }
}

pub fn default_harness() -> Harness {
    harness(
        FakeMessaging::default(),
        FakeUploader {
            url: Some("https://i.ibb.co/abc/poster.png".to_string()),
        },
        FakeForms {
            links: Some(FormLinks {
                form_url: Some("https://forms.example/f".to_string()),
                summary_url: Some("https://sheets.example/s".to_string()),
            }),
            participants: Some(vec!["王小明".to_string(), "林美美".to_string()]),
            ..FakeForms::default()
        },
    )
}

pub fn text_event(reply_token: &str, user_id: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "message",
        "replyToken": reply_token,
        "source": {"type": "user", "userId": user_id},
        "message": {"type": "text", "id": format!("m-{reply_token}"), "text": text}
    })
}

pub fn image_event(reply_token: &str, user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "message",
        "replyToken": reply_token,
        "source": {"type": "user", "userId": user_id},
        "message": {"type": "image", "id": format!("img-{reply_token}")}
    })
}

/// Serializes a delivery and signs it with [`SECRET`].
pub fn signed_delivery(events: Vec<serde_json::Value>) -> (String, String) {
    let body = serde_json::json!({"destination": "Ubot", "events": events}).to_string();
    let signature = compute_signature(&body, SECRET);
    (body, signature)
}
