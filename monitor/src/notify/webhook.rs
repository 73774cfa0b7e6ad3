use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::notify::channel::BroadcastChannel;
use crate::notify::errors::NotifyError;

/// Broadcast channel posting to a chat webhook (Discord-compatible
/// `{"content": ...}` payload).
#[derive(Clone)]
pub struct WebhookChannel {
    http: Client,
    url: String,
}

impl WebhookChannel {
    pub fn new(url: String) -> Result<Self, NotifyError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, url })
    }
}

#[async_trait]
impl BroadcastChannel for WebhookChannel {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.http
            .post(&self.url)
            .json(&serde_json::json!({ "content": text }))
            .send()
            .await?
            .error_for_status()?;

        debug!(bytes = text.len(), "webhook digest delivered");

        Ok(())
    }
}
