//! One full evaluation cycle.
//!
//! Data flow per symbol:
//! Feed → sample → percentage change → alert book → {dispatcher, recorder}
//!
//! Error containment rules:
//! - Feed trouble or degenerate prices skip the symbol (warn), never the cycle.
//! - A failed notification or store write is logged and counted; the alert
//!   state transition it followed is not rolled back.
//! - Nothing escapes `run_cycle` into the scheduler loop.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use tracing::{debug, error, info, warn};

use crate::feed::client::FeedSource;
use crate::feed::errors::FeedError;
use crate::history::recorder::{HistoryRecorder, RecordOutcome};
use crate::metrics::counters::Counters;
use crate::notify::dispatcher::AlertDispatcher;
use crate::time::now_ms;
use crate::watch::evaluator::percentage_change;
use crate::watch::registry::InstrumentRegistry;
use crate::watch::state::{AlertBook, Outcome};
use crate::watch::types::{ChangeResult, CycleLog, CycleReport, PriceSample};

/// Everything one cycle needs, owned by the scheduler loop and passed by
/// reference into each invocation. No globals.
pub struct WatchContext {
    pub registry: InstrumentRegistry,
    pub feed: Arc<dyn FeedSource>,
    pub dispatcher: AlertDispatcher,
    pub recorder: HistoryRecorder,
    pub book: AlertBook,
    pub log: CycleLog,
    pub counters: Counters,
}

/// Runs one evaluation cycle over every registered instrument, then sends
/// the accumulated cycle digest. Always completes.
pub async fn run_cycle(ctx: &mut WatchContext) -> CycleReport {
    ctx.log.clear();

    let threshold = ctx.registry.threshold_pct();
    let mut report = CycleReport::default();

    info!(
        symbols = ctx.registry.len(),
        threshold_pct = threshold,
        "starting evaluation cycle"
    );

    let instruments = ctx.registry.instruments().to_vec();
    for instrument in &instruments {
        let symbol = instrument.symbol.as_str();

        let sample = match sample_symbol(ctx.feed.as_ref(), symbol).await {
            Ok(s) => s,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "symbol skipped: no usable data");
                ctx.log.push(format!("{symbol}: skipped ({e})"));
                ctx.counters
                    .symbols_skipped_no_data
                    .fetch_add(1, Ordering::Relaxed);
                report.skipped += 1;
                continue;
            }
        };

        let pct = match percentage_change(sample.previous_close, sample.current_price) {
            Ok(p) => p,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "symbol skipped: degenerate prices");
                ctx.log.push(format!("{symbol}: skipped ({e})"));
                ctx.counters
                    .symbols_skipped_degenerate
                    .fetch_add(1, Ordering::Relaxed);
                report.skipped += 1;
                continue;
            }
        };

        let result = ChangeResult::from_sample(sample, pct);

        ctx.log.push(format!("{symbol}: {pct:.2}% change"));
        report.evaluated += 1;

        let outcome = ctx.book.apply(symbol, pct, threshold);
        let alert_sent = outcome == Outcome::Fired;

        match outcome {
            Outcome::Fired => {
                info!(
                    symbol = %symbol,
                    pct = pct,
                    threshold_pct = threshold,
                    "breach detected, dispatching alert"
                );
                ctx.log.push(format!(
                    "{symbol}: breach at {pct:.2}% (threshold {threshold:.2}%), alert fired"
                ));
                ctx.counters.alerts_fired.fetch_add(1, Ordering::Relaxed);
                report.fired += 1;

                ctx.dispatcher.dispatch_fire(&result).await;
            }
            Outcome::Suppressed => {
                debug!(symbol = %symbol, pct = pct, "still breached, alert already sent");
                ctx.log
                    .push(format!("{symbol}: still breached, alert already sent"));
                ctx.counters
                    .alerts_suppressed
                    .fetch_add(1, Ordering::Relaxed);
                report.suppressed += 1;
            }
            Outcome::Reset => {
                info!(symbol = %symbol, pct = pct, "recovered above threshold, alert re-armed");
                ctx.log
                    .push(format!("{symbol}: recovered above threshold, alert re-armed"));
                ctx.counters.alerts_reset.fetch_add(1, Ordering::Relaxed);
                report.reset += 1;
            }
            Outcome::Steady => {}
        }

        match ctx.recorder.record(&result, alert_sent).await {
            Ok(RecordOutcome::Written) => {
                ctx.counters.records_written.fetch_add(1, Ordering::Relaxed);
                report.records_written += 1;
            }
            Ok(RecordOutcome::SkippedNearDuplicate) => {
                ctx.counters.records_skipped.fetch_add(1, Ordering::Relaxed);
                report.records_skipped += 1;
            }
            Err(e) => {
                error!(symbol = %symbol, error = %e, "history write failed");
                ctx.counters.store_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    ctx.dispatcher.dispatch_digest(ctx.log.lines()).await;

    ctx.counters.cycles_run.fetch_add(1, Ordering::Relaxed);

    report
}

/// Pulls the two most recent closes for `symbol`. Fewer than two closes
/// means the symbol has no usable data this cycle.
async fn sample_symbol(feed: &dyn FeedSource, symbol: &str) -> Result<PriceSample, FeedError> {
    let closes = feed.fetch_recent_closes(symbol).await?;

    if closes.len() < 2 {
        return Err(FeedError::InsufficientData {
            symbol: symbol.to_string(),
            got: closes.len(),
        });
    }

    let previous = closes[closes.len() - 2];
    let current = closes[closes.len() - 1];

    debug!(
        symbol = %symbol,
        previous_close = previous.close,
        current_price = current.close,
        "sampled closes"
    );

    Ok(PriceSample {
        symbol: symbol.to_string(),
        previous_close: previous.close,
        current_price: current.close,
        observed_at_ms: now_ms(),
    })
}
