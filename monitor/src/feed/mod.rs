pub mod client;
pub mod errors;
pub mod types;

pub use client::{ChartClient, FeedSource};
pub use errors::FeedError;
pub use types::*;
