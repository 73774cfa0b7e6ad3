use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use common::logger::warn_if_slow;

use crate::history::model::PriceRecord;
use crate::history::repository::HistoryRepository;
use crate::time::now_ms;
use crate::watch::types::ChangeResult;

/// Write-side guard in front of the history repository.
///
/// Skips writes whose current price is within `tolerance` of the most
/// recently recorded price for the same symbol. This is an idempotence
/// guard against noisy re-polls, not part of the alert logic; the state
/// machine runs whether or not the write happens.
pub struct HistoryRecorder {
    repo: Arc<dyn HistoryRepository>,
    tolerance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    Written,
    SkippedNearDuplicate,
}

impl HistoryRecorder {
    pub fn new(repo: Arc<dyn HistoryRepository>, tolerance: f64) -> Self {
        Self { repo, tolerance }
    }

    #[instrument(skip(self, result), target = "history", fields(symbol = %result.symbol))]
    pub async fn record(&self, result: &ChangeResult, alert_sent: bool) -> Result<RecordOutcome> {
        let last = warn_if_slow("history_most_recent", Duration::from_millis(100), async {
            self.repo.most_recent_price(&result.symbol).await
        })
        .await
        .context("near-duplicate lookup failed")?;

        if let Some(last_price) = last {
            if (result.current_price - last_price).abs() < self.tolerance {
                debug!(
                    last_price,
                    current = result.current_price,
                    "near-duplicate sample, write skipped"
                );
                return Ok(RecordOutcome::SkippedNearDuplicate);
            }
        }

        let record = PriceRecord::from_change(result, alert_sent, now_ms());

        warn_if_slow("history_append", Duration::from_millis(100), async {
            self.repo.append(&record).await
        })
        .await
        .context("append price record failed")?;

        Ok(RecordOutcome::Written)
    }
}
