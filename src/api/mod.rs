//! Webhook handling and request processing

pub mod event_handler;
pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod server;
pub mod signature;

// Re-export the main entry points for convenience
pub use handler::{Dispatcher, WebhookResponse, handle_gateway_event};
