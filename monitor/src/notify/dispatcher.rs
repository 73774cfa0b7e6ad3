//! Formats alert and digest messages and fans them out to the configured
//! channels.
//!
//! Duplication decisions are NOT made here; the alert book upstream is
//! the sole gate on whether a fire message is requested at all. A channel
//! that is not configured is a warn-level no-op; a failed send is logged
//! and counted, and never unwinds the state transition that requested it.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use tracing::{debug, error, info, warn};

use crate::metrics::counters::Counters;
use crate::notify::channel::{BroadcastChannel, DirectChannel};
use crate::watch::types::ChangeResult;

pub struct AlertDispatcher {
    direct: Option<Arc<dyn DirectChannel>>,
    broadcast: Option<Arc<dyn BroadcastChannel>>,
    counters: Counters,
}

impl AlertDispatcher {
    pub fn new(
        direct: Option<Arc<dyn DirectChannel>>,
        broadcast: Option<Arc<dyn BroadcastChannel>>,
        counters: Counters,
    ) -> Self {
        Self {
            direct,
            broadcast,
            counters,
        }
    }

    /// Sends a fire alert through the direct channel.
    pub async fn dispatch_fire(&self, result: &ChangeResult) {
        let Some(channel) = &self.direct else {
            warn!(symbol = %result.symbol, "no direct channel configured, fire alert dropped");
            return;
        };

        let (subject, body) = format_fire(result);

        match channel.send(&subject, &body).await {
            Ok(()) => info!(symbol = %result.symbol, "fire alert delivered"),
            Err(e) => {
                error!(symbol = %result.symbol, error = %e, "fire alert send failed");
                self.counters.notify_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Sends the cycle digest through the broadcast channel.
    pub async fn dispatch_digest(&self, lines: &[String]) {
        if lines.is_empty() {
            return;
        }

        let Some(channel) = &self.broadcast else {
            warn!("no broadcast channel configured, cycle digest dropped");
            return;
        };

        let text = render_digest(lines);

        match channel.send(&text).await {
            Ok(()) => debug!(lines = lines.len(), "cycle digest delivered"),
            Err(e) => {
                error!(error = %e, "cycle digest send failed");
                self.counters.notify_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

/// Fire alert subject and body.
pub(crate) fn format_fire(result: &ChangeResult) -> (String, String) {
    let subject = format!(
        "ALERT: {} dropped {:.2}%",
        result.symbol, result.percentage_change
    );
    let body = format!(
        "{} moved from {:.2} to {:.2} ({:.2}% change).",
        result.symbol, result.previous_close, result.current_price, result.percentage_change
    );

    (subject, body)
}

/// Digest preserves cycle-log ordering, one line per entry.
pub(crate) fn render_digest(lines: &[String]) -> String {
    lines.join("\n")
}
