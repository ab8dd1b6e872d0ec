use serde_json::Value;

use crate::errors::BotError;
use crate::line::WebhookEnvelope;
use crate::replies::QUERY_COMMAND;

pub fn decode_envelope(body: &str) -> Result<WebhookEnvelope, BotError> {
    serde_json::from_str(body)
        .map_err(|e| BotError::ParseError(format!("Invalid webhook payload: {}", e)))
}

/// Returns the event title of a `查詢活動：<title>` command.
pub fn parse_query_command(text: &str) -> Option<&str> {
    text.strip_prefix(QUERY_COMMAND).map(str::trim)
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}
