use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Database connection string.
    pub database_url: String,

    // =========================
    // Watch configuration
    // =========================
    /// Symbols tracked for the lifetime of the process.
    pub symbols: Vec<String>,

    /// Signed percentage-change threshold. Negative: a decline at or
    /// beyond this value (<=) counts as a breach.
    pub drop_threshold_pct: f64,

    /// How often a full evaluation cycle is due.
    pub poll_interval: Duration,

    /// How often the loop checks whether a cycle is due.
    ///
    /// A cycle always runs to completion before the next check, so this
    /// only bounds how late a due cycle can start.
    pub tick_interval: Duration,

    /// Absolute price distance under which a new sample is considered a
    /// near-duplicate of the last persisted one and the write is skipped.
    pub near_duplicate_tolerance: f64,

    // =========================
    // Collaborator endpoints
    // =========================
    /// Base URL of the price feed (chart API).
    pub feed_base_url: String,

    /// Direct channel credentials. Both must be present for the channel
    /// to be enabled.
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,

    /// Broadcast channel endpoint. Absent means the digest is disabled.
    pub alert_webhook_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://monitor_dev.db".to_string());

        let symbols = parse_symbols(
            &std::env::var("WATCH_SYMBOLS").unwrap_or_else(|_| "ASML,GOOG,GOOGL,NVDA".to_string()),
        );

        Self {
            database_url,
            symbols,

            drop_threshold_pct: env_f64("DROP_THRESHOLD_PCT", -4.0),

            // Cadence defaults: hourly cycles, checked once a minute.
            poll_interval: Duration::from_secs(env_u64("POLL_INTERVAL_SECS", 3_600)),
            tick_interval: Duration::from_secs(env_u64("TICK_INTERVAL_SECS", 60)),

            near_duplicate_tolerance: env_f64("NEAR_DUPLICATE_TOLERANCE", 0.5),

            feed_base_url: std::env::var("FEED_BASE_URL")
                .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string()),

            telegram_bot_token: env_opt("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: env_opt("TELEGRAM_CHAT_ID"),
            alert_webhook_url: env_opt("ALERT_WEBHOOK_URL"),
        }
    }
}

/// Splits a comma-separated symbol list, dropping empty entries.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Treats unset AND empty as absent.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
