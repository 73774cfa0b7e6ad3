use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::notify::channel::DirectChannel;
use crate::notify::errors::NotifyError;

/// Direct channel over the Telegram Bot API (`sendMessage`).
#[derive(Clone)]
pub struct TelegramChannel {
    http: Client,
    token: String,
    chat_id: String,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramChannel {
    pub fn new(token: String, chat_id: String) -> Result<Self, NotifyError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            token,
            chat_id,
        })
    }
}

#[async_trait]
impl DirectChannel for TelegramChannel {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let text = format!("{subject}\n{body}");

        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await?
            .error_for_status()?;

        let parsed: SendMessageResponse = resp.json().await?;
        if !parsed.ok {
            return Err(NotifyError::Rejected(
                parsed.description.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        debug!(chat_id = %self.chat_id, "telegram message delivered");

        Ok(())
    }
}
