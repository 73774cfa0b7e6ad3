use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// One daily close, oldest-to-newest ordering is owned by the feed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosingPrice {
    pub date: NaiveDate,
    pub close: f64,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: ChartNode,
}

#[derive(Debug, Deserialize)]
pub struct ChartNode {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartApiError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,

    pub indicators: IndicatorsNode,
}

#[derive(Debug, Deserialize)]
pub struct IndicatorsNode {
    pub quote: Vec<QuoteNode>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteNode {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResult {
    /// Pairs timestamps with their close values, dropping holes
    /// (null closes on half-traded days, unmappable timestamps).
    pub fn into_closes(self) -> Vec<ClosingPrice> {
        let closes = match self.indicators.quote.into_iter().next() {
            Some(q) => q.close,
            None => return Vec::new(),
        };

        self.timestamp
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let close = close?;
                let date = DateTime::from_timestamp(ts, 0)?.date_naive();
                Some(ClosingPrice { date, close })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
      "chart": {
        "result": [
          {
            "meta": { "symbol": "ASML" },
            "timestamp": [1754314200, 1754400600],
            "indicators": {
              "quote": [
                { "close": [712.5, 698.25] }
              ]
            }
          }
        ],
        "error": null
      }
    }"#;

    #[test]
    fn parses_chart_envelope() {
        let envelope: ChartEnvelope = serde_json::from_str(SAMPLE).expect("parse sample");
        let result = envelope.chart.result.expect("result present");
        let closes = result.into_iter().next().expect("one result").into_closes();

        assert_eq!(closes.len(), 2);
        assert!((closes[0].close - 712.5).abs() < 1e-9);
        assert!((closes[1].close - 698.25).abs() < 1e-9);
        assert!(closes[0].date <= closes[1].date);
    }

    #[test]
    fn null_closes_are_dropped() {
        let result = ChartResult {
            timestamp: vec![1, 2, 3],
            indicators: IndicatorsNode {
                quote: vec![QuoteNode {
                    close: vec![Some(10.0), None, Some(11.0)],
                }],
            },
        };

        let closes = result.into_closes();
        assert_eq!(closes.len(), 2);
        assert!((closes[0].close - 10.0).abs() < 1e-9);
        assert!((closes[1].close - 11.0).abs() < 1e-9);
    }

    #[test]
    fn missing_quote_block_yields_no_closes() {
        let result = ChartResult {
            timestamp: vec![1, 2],
            indicators: IndicatorsNode { quote: vec![] },
        };

        assert!(result.into_closes().is_empty());
    }
}
