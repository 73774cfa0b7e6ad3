use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::feed::errors::FeedError;
use crate::feed::types::{ChartEnvelope, ClosingPrice};

/// Source of recent daily closes for a symbol.
///
/// Returns an oldest-to-newest sequence; fewer than two entries means the
/// symbol has no usable data this cycle. Failures never escalate beyond
/// the symbol being sampled.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_recent_closes(&self, symbol: &str) -> Result<Vec<ClosingPrice>, FeedError>;
}

/// Chart-API client (Yahoo v8 shape): daily candles over a short range,
/// from which the last two closes are taken.
#[derive(Clone)]
pub struct ChartClient {
    http: Client,
    base_url: String,
}

impl ChartClient {
    pub fn new(base_url: String) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl FeedSource for ChartClient {
    #[instrument(
        skip(self),
        fields(symbol = %symbol),
        level = "debug"
    )]
    async fn fetch_recent_closes(&self, symbol: &str) -> Result<Vec<ClosingPrice>, FeedError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);

        let resp = self
            .http
            .get(&url)
            .query(&[("range", "5d"), ("interval", "1d")])
            .send()
            .await?
            .error_for_status()?;

        let envelope: ChartEnvelope = resp.json().await?;

        if let Some(err) = envelope.chart.error {
            return Err(FeedError::Rejected {
                symbol: symbol.to_string(),
                reason: format!("{}: {}", err.code, err.description),
            });
        }

        let result = envelope
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| FeedError::MalformedPayload {
                symbol: symbol.to_string(),
            })?;

        let closes = result.into_closes();

        debug!(count = closes.len(), "chart closes fetched");

        Ok(closes)
    }
}
