//! formbot - a LINE chat bot that turns event descriptions into sign-up forms.
//!
//! An operator uploads a poster image, then sends a message such as
//!
//! ```text
//! 活動標題：社區清潔日
//! 活動說明：請攜帶手套
//! 自訂題目：
//! 單選：場次：上午,下午
//! ```
//!
//! The bot parses it into an [`core::models::EventDefinition`], attaches the
//! last image the same user uploaded, asks the form-builder web app to create
//! a form and replies with the form and results-sheet links.
//!
//! # Architecture
//!
//! - [`event_parser`] turns message text into an event definition
//! - [`core::image_cache`] remembers the latest uploaded image per user
//! - [`clients`] talk to the image host and the form builder
//! - [`line`] talks to the LINE Messaging API
//! - [`api`] verifies webhook signatures and routes events
//!
//! Two front ends share the same [`api::Dispatcher`]: an axum server
//! (`formbot-server`) and an AWS Lambda entry point (`formbot-lambda`,
//! behind the `lambda` feature).
//!
//! # Example
//!
//! ```
//! use formbot::event_parser::parse_event_definition;
//!
//! let text = "活動標題：讀書會\n活動說明：每週三晚上";
//! let definition = parse_event_definition(text, "").unwrap();
//! assert_eq!(definition.title, "讀書會");
//! assert_eq!(definition.description, "每週三晚上");
//! ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod event_parser;
pub mod line;
pub mod replies;

pub use api::Dispatcher;
pub use errors::BotError;

/// Configure structured JSON logging.
///
/// The filter is taken from `RUST_LOG` and defaults to `formbot=info`.
/// Calling it more than once is harmless; later calls keep the first
/// subscriber.
///
/// # Example
///
/// ```
/// formbot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "formbot=info,tower_http=info".into());
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
