use std::sync::Arc;

use monitor::{
    config::AppConfig,
    db::Db,
    feed::client::ChartClient,
    history::{recorder::HistoryRecorder, repository_sqlx::SqlxHistoryRepository},
    metrics::counters::Counters,
    notify::{
        channel::{BroadcastChannel, DirectChannel},
        dispatcher::AlertDispatcher,
        telegram::TelegramChannel,
        webhook::WebhookChannel,
    },
    watch::{
        cycle::WatchContext, poller::run_watch_loop, registry::InstrumentRegistry,
        state::AlertBook, types::CycleLog,
    },
};

/// Builds the direct (per-alert) channel if both credentials are set.
fn build_direct_channel(cfg: &AppConfig) -> anyhow::Result<Option<Arc<dyn DirectChannel>>> {
    match (&cfg.telegram_bot_token, &cfg.telegram_chat_id) {
        (Some(token), Some(chat_id)) => {
            tracing::info!("direct channel enabled (telegram)");
            let channel = TelegramChannel::new(token.clone(), chat_id.clone())?;
            Ok(Some(Arc::new(channel)))
        }
        _ => {
            tracing::warn!("direct channel disabled (no telegram credentials configured)");
            Ok(None)
        }
    }
}

/// Builds the broadcast (digest) channel if a webhook URL is set.
fn build_broadcast_channel(cfg: &AppConfig) -> anyhow::Result<Option<Arc<dyn BroadcastChannel>>> {
    match &cfg.alert_webhook_url {
        Some(url) => {
            tracing::info!("broadcast channel enabled (webhook)");
            let channel = WebhookChannel::new(url.clone())?;
            Ok(Some(Arc::new(channel)))
        }
        None => {
            tracing::warn!("broadcast channel disabled (no webhook URL configured)");
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    sqlx::any::install_default_drivers();

    let is_production = std::env::var("APP_ENV").unwrap_or_default() == "production";
    common::logger::init_logger("monitor", is_production);

    tracing::info!("starting price watch...");

    let cfg = AppConfig::from_env();

    let db = Db::connect(&cfg.database_url).await?;
    db.migrate().await?;

    let repo = Arc::new(SqlxHistoryRepository::new(db.pool.clone()));
    let recorder = HistoryRecorder::new(repo, cfg.near_duplicate_tolerance);

    let feed = Arc::new(ChartClient::new(cfg.feed_base_url.clone())?);

    let counters = Counters::default();
    let dispatcher = AlertDispatcher::new(
        build_direct_channel(&cfg)?,
        build_broadcast_channel(&cfg)?,
        counters.clone(),
    );

    let registry = InstrumentRegistry::new(cfg.symbols.clone(), cfg.drop_threshold_pct);
    if registry.is_empty() {
        anyhow::bail!("no symbols configured (WATCH_SYMBOLS is empty)");
    }

    let ctx = WatchContext {
        registry,
        feed,
        dispatcher,
        recorder,
        book: AlertBook::new(),
        log: CycleLog::default(),
        counters,
    };

    tokio::select! {
        res = run_watch_loop(ctx, cfg.poll_interval, cfg.tick_interval) => res,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
            Ok(())
        }
    }
}
