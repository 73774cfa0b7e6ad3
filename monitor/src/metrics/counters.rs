use std::sync::Arc;
use std::sync::atomic::AtomicU64;

/// Minimal counters for operational visibility.
#[derive(Clone, Default)]
pub struct Counters {
    pub cycles_run: Arc<AtomicU64>,

    pub alerts_fired: Arc<AtomicU64>,
    pub alerts_suppressed: Arc<AtomicU64>,
    pub alerts_reset: Arc<AtomicU64>,

    // skip reasons
    pub symbols_skipped_no_data: Arc<AtomicU64>,
    pub symbols_skipped_degenerate: Arc<AtomicU64>,

    pub records_written: Arc<AtomicU64>,
    pub records_skipped: Arc<AtomicU64>,

    pub notify_failures: Arc<AtomicU64>,
    pub store_failures: Arc<AtomicU64>,
}
