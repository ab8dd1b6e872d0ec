//! All LINE-specific functionality

pub mod client;
pub mod events;

// Re-export main types for convenience
pub use client::{LineClient, MAX_TEXT_LENGTH, MessagingApi};
pub use events::{EventSource, MessageContent, WebhookEnvelope, WebhookEvent};
