//! Watch loop: runs one evaluation cycle at startup, then at a fixed
//! cadence, checked on a short tick.
//!
//! The loop is strictly sequential: a cycle always completes (including
//! all notification sends and history writes) before the next due-check,
//! so cycles never overlap.

use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::time::now_ms;
use crate::watch::cycle::{WatchContext, run_cycle};

/// Decides when a cycle is due on a coarse wall-clock cadence.
/// The first ask is always due, so a cycle runs at startup.
#[derive(Debug)]
pub struct Cadence {
    period_ms: u64,
    last_run_ms: Option<u64>,
}

impl Cadence {
    pub fn new(period: Duration) -> Self {
        Self {
            period_ms: period.as_millis() as u64,
            last_run_ms: None,
        }
    }

    /// True when a cycle should run now; marks the run time when it is.
    pub fn due(&mut self, now_ms: u64) -> bool {
        match self.last_run_ms {
            None => {
                self.last_run_ms = Some(now_ms);
                true
            }
            Some(last) if now_ms.saturating_sub(last) >= self.period_ms => {
                self.last_run_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }
}

/// Runs the watch loop forever.
pub async fn run_watch_loop(
    mut ctx: WatchContext,
    poll_every: Duration,
    tick_every: Duration,
) -> anyhow::Result<()> {
    info!(
        symbols = ctx.registry.len(),
        poll_secs = poll_every.as_secs(),
        tick_secs = tick_every.as_secs(),
        "price watch loop started"
    );

    ctx.dispatcher
        .dispatch_digest(&["stock monitor started".to_string()])
        .await;

    let mut cadence = Cadence::new(poll_every);

    let mut ticker = interval(tick_every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if cadence.due(now_ms()) {
            let report = run_cycle(&mut ctx).await;
            info!(
                evaluated = report.evaluated,
                fired = report.fired,
                suppressed = report.suppressed,
                reset = report.reset,
                skipped = report.skipped,
                "cycle complete"
            );
        }

        ticker.tick().await;
    }
}
