use anyhow::Result;
use async_trait::async_trait;

use crate::history::model::PriceRecord;

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Appends one record. Never updates or deletes.
    async fn append(&self, record: &PriceRecord) -> Result<()>;

    /// Most recently recorded `current_price` for `symbol`, if any.
    /// Backs the near-duplicate write suppression.
    async fn most_recent_price(&self, symbol: &str) -> Result<Option<f64>>;
}
