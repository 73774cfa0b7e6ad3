use async_trait::async_trait;

use crate::notify::errors::NotifyError;

/// Per-alert channel addressed to one recipient (subject + body).
/// Used for fire alerts.
#[async_trait]
pub trait DirectChannel: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}

/// Free-form broadcast channel. Used for whole-cycle digests.
#[async_trait]
pub trait BroadcastChannel: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
