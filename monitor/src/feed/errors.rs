use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed rejected symbol {symbol}: {reason}")]
    Rejected { symbol: String, reason: String },

    #[error("insufficient data for {symbol}: {got} close(s), need 2")]
    InsufficientData { symbol: String, got: usize },

    #[error("malformed chart payload for {symbol}")]
    MalformedPayload { symbol: String },
}
