use sqlx::AnyPool;

pub async fn migrate(pool: &AnyPool) -> anyhow::Result<()> {
    // Price history
    sqlx::query(
        r#"
CREATE TABLE IF NOT EXISTS price_records (
  record_id TEXT PRIMARY KEY,
  symbol TEXT NOT NULL,
  previous_close REAL NOT NULL,
  current_price REAL NOT NULL,
  percentage_change REAL NOT NULL,
  alert_sent INTEGER NOT NULL CHECK (alert_sent IN (0,1)),
  recorded_at_ms BIGINT NOT NULL
);
"#,
    )
    .execute(pool)
    .await?;

    // Supports "most recent price per symbol" lookups.
    sqlx::query(
        r#"CREATE INDEX IF NOT EXISTS idx_price_records_symbol_ts
           ON price_records(symbol, recorded_at_ms);"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
