//! Handler for individual webhook events.
//!
//! - image messages are uploaded and remembered for the sender
//! - text messages are a participant query, an event definition, or
//!   anything else (answered with usage instructions)
//!
//! Every handled event produces exactly one reply; failures become error
//! replies instead of propagating.

use tracing::{error, info};

use super::handler::Dispatcher;
use super::parsing;
use crate::clients::FormLinks;
use crate::core::models::CustomQuestion;
use crate::errors::BotError;
use crate::event_parser;
use crate::line::{MessageContent, WebhookEvent};
use crate::replies;

/// Handle one event from a delivery and send its reply.
pub async fn handle_event(dispatcher: &Dispatcher, event: &WebhookEvent) {
    let WebhookEvent::Message {
        reply_token,
        source,
        message,
    } = event
    else {
        info!("Skipping non-message event");
        return;
    };

    let Some(reply_token) = reply_token.as_deref() else {
        info!("Skipping message event without reply token");
        return;
    };

    let user_id = source.user_id.as_deref().unwrap_or_default();

    let reply = match message {
        MessageContent::Image { id } => handle_image(dispatcher, user_id, id).await,
        MessageContent::Text { text, .. } => handle_text(dispatcher, user_id, text).await,
        MessageContent::Other => {
            info!(user_id, "Skipping unsupported message type");
            return;
        }
    };

    if let Err(e) = dispatcher.messaging.reply_text(reply_token, &reply).await {
        error!(user_id, "Failed to send reply: {}", e);
    }
}

/// Upload an image message and cache its URL for `user_id`. Returns the
/// reply text.
pub async fn handle_image(dispatcher: &Dispatcher, user_id: &str, message_id: &str) -> String {
    match upload_image(dispatcher, user_id, message_id).await {
        Ok(url) => {
            info!(user_id, url = %url, "Cached uploaded image");
            replies::IMAGE_UPLOADED.to_string()
        }
        Err(e) => {
            error!(user_id, "Image upload failed: {}", e);
            replies::upload_failed(&e)
        }
    }
}

async fn upload_image(
    dispatcher: &Dispatcher,
    user_id: &str,
    message_id: &str,
) -> Result<String, BotError> {
    let bytes = dispatcher.messaging.get_message_content(message_id).await?;
    let url = dispatcher.uploader.upload(&bytes).await?;
    dispatcher.cache.put(user_id, &url).await;
    Ok(url)
}

/// Route a text message. Returns the reply text.
pub async fn handle_text(dispatcher: &Dispatcher, user_id: &str, text: &str) -> String {
    if let Some(title) = parsing::parse_query_command(text) {
        info!(user_id, title, "Participant query");
        return match dispatcher.forms.list_participants(title).await {
            Ok(names) => replies::participant_list(title, &names),
            Err(e) => {
                error!(user_id, "Participant query failed: {}", e);
                replies::query_failed(&e)
            }
        };
    }

    if event_parser::is_event_definition(text) {
        return match create_form(dispatcher, user_id, text).await {
            Ok(links) => replies::form_created(&links),
            Err(e) => {
                error!(user_id, "Form creation failed: {}", e);
                replies::form_failed(&e)
            }
        };
    }

    replies::usage()
}

async fn create_form(
    dispatcher: &Dispatcher,
    user_id: &str,
    text: &str,
) -> Result<FormLinks, BotError> {
    let image_url = dispatcher.cache.get(user_id).await.unwrap_or_default();
    let definition = event_parser::parse_event_definition(text, &image_url)?;

    info!(
        user_id,
        title = %definition.title,
        has_image = !image_url.is_empty(),
        default_overrides = definition.default_questions.len(),
        questions = ?definition
            .custom_questions
            .iter()
            .map(CustomQuestion::title)
            .collect::<Vec<_>>(),
        "Creating form"
    );

    dispatcher.forms.create_form(&definition).await
}
