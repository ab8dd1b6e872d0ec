use formbot::api::signature::{compute_signature, verify_line_signature};

const SECRET: &str = "channel-secret";
const BODY: &str = r#"{"destination":"Ubot","events":[]}"#;

#[test]
fn test_signed_body_verifies() {
    let signature = compute_signature(BODY, SECRET);
    assert!(verify_line_signature(BODY, &signature, SECRET));
}

#[test]
fn test_known_vector() {
    // base64(HMAC-SHA256("key", "The quick brown fox jumps over the lazy dog"))
    let signature = compute_signature("The quick brown fox jumps over the lazy dog", "key");
    assert_eq!(signature, "97yD9DBThCSxMpjmqm+xQ+9NWaFJRhdZl0edvC0aPNg=");
}

#[test]
fn test_tampered_body_fails() {
    let signature = compute_signature(BODY, SECRET);
    assert!(!verify_line_signature(
        r#"{"destination":"Ubot","events":[{}]}"#,
        &signature,
        SECRET
    ));
}

#[test]
fn test_wrong_secret_fails() {
    let signature = compute_signature(BODY, "other-secret");
    assert!(!verify_line_signature(BODY, &signature, SECRET));
}

#[test]
fn test_garbage_signature_fails() {
    assert!(!verify_line_signature(BODY, "not base64 !!", SECRET));
    assert!(!verify_line_signature(BODY, "", SECRET));
}
