/// One sampled (previous close, current price) pair for an instrument.
/// Cycle-scoped; only its derived record is persisted.
#[derive(Clone, Debug)]
pub struct PriceSample {
    pub symbol: String,
    pub previous_close: f64,
    pub current_price: f64,
    pub observed_at_ms: u64,
}

/// A sample plus its derived period-over-period change.
#[derive(Clone, Debug)]
pub struct ChangeResult {
    pub symbol: String,
    pub previous_close: f64,
    pub current_price: f64,
    pub percentage_change: f64,
    pub observed_at_ms: u64,
}

impl ChangeResult {
    pub fn from_sample(sample: PriceSample, percentage_change: f64) -> Self {
        Self {
            symbol: sample.symbol,
            previous_close: sample.previous_close,
            current_price: sample.current_price,
            percentage_change,
            observed_at_ms: sample.observed_at_ms,
        }
    }
}

/// Ordered human-readable lines accumulated during one cycle,
/// cleared at cycle start and rendered into the broadcast digest.
#[derive(Debug, Default)]
pub struct CycleLog {
    lines: Vec<String>,
}

impl CycleLog {
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Per-cycle tally, returned by `run_cycle` for observability and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub evaluated: usize,
    pub fired: usize,
    pub suppressed: usize,
    pub reset: usize,
    pub skipped: usize,
    pub records_written: usize,
    pub records_skipped: usize,
}
