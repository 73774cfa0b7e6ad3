use anyhow::Context;
use async_trait::async_trait;
use sqlx::{AnyPool, Row};

use crate::history::model::PriceRecord;
use crate::history::repository::HistoryRepository;

/// SQLx-backed implementation of HistoryRepository.
/// Responsible only for persistence and row mapping.
pub struct SqlxHistoryRepository {
    pool: AnyPool,
}

impl SqlxHistoryRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for SqlxHistoryRepository {
    async fn append(&self, record: &PriceRecord) -> anyhow::Result<()> {
        let recorded_at = u64_to_i64(record.recorded_at_ms)?;

        sqlx::query(
            r#"
INSERT INTO price_records
  (record_id, symbol, previous_close, current_price, percentage_change, alert_sent, recorded_at_ms)
VALUES (?, ?, ?, ?, ?, ?, ?);
"#,
        )
        .bind(record.record_id.to_string())
        .bind(&record.symbol)
        .bind(record.previous_close)
        .bind(record.current_price)
        .bind(record.percentage_change)
        .bind(if record.alert_sent { 1_i64 } else { 0_i64 })
        .bind(recorded_at)
        .execute(&self.pool)
        .await
        .context("insert price record")?;

        Ok(())
    }

    async fn most_recent_price(&self, symbol: &str) -> anyhow::Result<Option<f64>> {
        let row = sqlx::query(
            r#"
SELECT current_price
FROM price_records
WHERE symbol = ?
ORDER BY recorded_at_ms DESC
LIMIT 1;
"#,
        )
        .bind(symbol)
        .fetch_optional(&self.pool)
        .await
        .context("fetch most recent price")?;

        Ok(row.map(|r| r.get::<f64, _>("current_price")))
    }
}

fn u64_to_i64(v: u64) -> anyhow::Result<i64> {
    if v > i64::MAX as u64 {
        anyhow::bail!("u64 too large for i64: {v}");
    }
    Ok(v as i64)
}
