use uuid::Uuid;

use crate::watch::types::ChangeResult;

/// One persisted evaluation row. Append-only; rows are ordered by
/// `recorded_at_ms` per symbol.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceRecord {
    pub record_id: Uuid,
    pub symbol: String,
    pub previous_close: f64,
    pub current_price: f64,
    pub percentage_change: f64,
    /// True when this cycle's evaluation fired an alert for the symbol.
    /// Owned by the state machine, not by the transport outcome.
    pub alert_sent: bool,
    pub recorded_at_ms: u64,
}

impl PriceRecord {
    pub fn from_change(result: &ChangeResult, alert_sent: bool, recorded_at_ms: u64) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            symbol: result.symbol.clone(),
            previous_close: result.previous_close,
            current_price: result.current_price,
            percentage_change: result.percentage_change,
            alert_sent,
            recorded_at_ms,
        }
    }
}
