/// A tracked instrument. Symbols are unique within the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instrument {
    pub symbol: String,
}

/// Static set of tracked instruments plus the decline threshold.
/// Built once from config; immutable for the process lifetime.
#[derive(Clone, Debug)]
pub struct InstrumentRegistry {
    instruments: Vec<Instrument>,
    threshold_pct: f64,
}

impl InstrumentRegistry {
    /// Duplicate symbols are collapsed, first occurrence wins.
    pub fn new(symbols: impl IntoIterator<Item = String>, threshold_pct: f64) -> Self {
        let mut instruments: Vec<Instrument> = Vec::new();
        for symbol in symbols {
            if !instruments.iter().any(|i| i.symbol == symbol) {
                instruments.push(Instrument { symbol });
            }
        }

        Self {
            instruments,
            threshold_pct,
        }
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Signed breach threshold (negative percentage).
    pub fn threshold_pct(&self) -> f64 {
        self.threshold_pct
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
