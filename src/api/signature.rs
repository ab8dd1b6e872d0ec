use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::error;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "X-Line-Signature";

/// Checks `signature` against base64(HMAC-SHA256(channel secret, body)).
///
/// The comparison runs in constant time on the decoded MAC.
pub fn verify_line_signature(request_body: &str, signature: &str, channel_secret: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature.trim()) else {
        error!("Signature header is not valid base64");
        return false;
    };

    let mut mac = match Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return false;
        }
    };
    mac.update(request_body.as_bytes());

    if mac.verify_slice(&expected).is_ok() {
        true
    } else {
        error!("Signature verification failed");
        false
    }
}

pub fn compute_signature(request_body: &str, channel_secret: &str) -> String {
    let mut mac = match Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(request_body.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
