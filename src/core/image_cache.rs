//! Per-user memory of the most recently uploaded image.
//!
//! Entries are overwritten by the next upload from the same user and are
//! never removed, so a user who does not upload again keeps reusing their
//! last image. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Shared `user id -> image URL` map. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl ImageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `url` for `user_id`, replacing any earlier entry.
    pub async fn put(&self, user_id: &str, url: &str) {
        let mut entries = self.entries.lock().await;
        entries.insert(user_id.to_string(), url.to_string());
    }

    /// Returns the last URL stored for `user_id`, if any.
    pub async fn get(&self, user_id: &str) -> Option<String> {
        self.entries.lock().await.get(user_id).cloned()
    }
}
