use std::error::Error;

use formbot::errors::BotError;
use formbot::event_parser::ParseError;

#[test]
fn test_bot_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = BotError::UploadFailed("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_bot_error_display() {
    let error = BotError::UploadFailed("status=400".to_string());
    assert_eq!(format!("{error}"), "Image upload failed: status=400");

    let error = BotError::FormBuildFailed("HTTP status server error (500)".to_string());
    assert_eq!(
        format!("{error}"),
        "Form builder request failed: HTTP status server error (500)"
    );

    let error = BotError::SignatureInvalid;
    assert_eq!(format!("{error}"), "Invalid webhook signature");
}

#[test]
fn test_bot_error_from_conversions() {
    let err: BotError = ParseError::MissingTitle.into();
    match err {
        BotError::ParseError(msg) => assert!(msg.contains("活動標題：")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    let err: BotError = anyhow::anyhow!("test error").into();
    match err {
        BotError::ApiError(msg) => assert!(msg.contains("test error")),
        other => panic!("Unexpected error type: {other:?}"),
    }

    // Only checks that the conversion exists.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> BotError {
        BotError::from(err)
    }
}
