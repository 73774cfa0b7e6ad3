//! Per-instrument alert state machine.
//!
//! Responsibilities:
//! - Track Normal/Alerted per symbol across cycles.
//! - Decide fire / suppress / reset / steady for each evaluated change.
//!
//! Non-responsibilities:
//! - Sending anything (dispatcher does this).
//! - Persisting anything (history recorder does this).
//!
//! This machine is the sole gate on whether a fire notification is
//! requested. State lives in process memory only: after a restart every
//! symbol starts `Normal` again, so a still-breached instrument re-alerts
//! once. That is intended behavior.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertState {
    Normal,
    Alerted,
}

/// Outcome of one state-machine step for one instrument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Normal -> Alerted. The one case that triggers a notification.
    Fired,
    /// Still breached while Alerted. Logged, never re-notified.
    Suppressed,
    /// Alerted -> Normal on recovery. Silently re-arms future alerts.
    Reset,
    /// Normal and unbreached. Routine.
    Steady,
}

#[derive(Debug, Default)]
pub struct AlertBook {
    states: HashMap<String, AlertState>,
}

impl AlertBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one evaluated change for `symbol` and returns the transition
    /// outcome. Equality with the threshold counts as a breach (<=).
    ///
    /// A symbol gets its state entry on its first completed evaluation;
    /// skipped symbols never appear in the book.
    pub fn apply(&mut self, symbol: &str, percentage_change: f64, threshold_pct: f64) -> Outcome {
        let state = self
            .states
            .entry(symbol.to_string())
            .or_insert(AlertState::Normal);

        let breached = percentage_change <= threshold_pct;

        match (*state, breached) {
            (AlertState::Normal, true) => {
                *state = AlertState::Alerted;
                Outcome::Fired
            }
            (AlertState::Alerted, true) => Outcome::Suppressed,
            (AlertState::Alerted, false) => {
                *state = AlertState::Normal;
                Outcome::Reset
            }
            (AlertState::Normal, false) => Outcome::Steady,
        }
    }

    pub fn state(&self, symbol: &str) -> Option<AlertState> {
        self.states.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = -4.0;

    #[test]
    fn breach_from_normal_fires_once() {
        let mut book = AlertBook::new();

        assert_eq!(book.apply("NVDA", -5.0, THRESHOLD), Outcome::Fired);
        assert_eq!(book.state("NVDA"), Some(AlertState::Alerted));
    }

    #[test]
    fn repeated_breach_is_suppressed() {
        let mut book = AlertBook::new();

        assert_eq!(book.apply("NVDA", -5.0, THRESHOLD), Outcome::Fired);
        assert_eq!(book.apply("NVDA", -6.2, THRESHOLD), Outcome::Suppressed);
        assert_eq!(book.apply("NVDA", -4.1, THRESHOLD), Outcome::Suppressed);
        assert_eq!(book.state("NVDA"), Some(AlertState::Alerted));
    }

    #[test]
    fn recovery_resets_silently_and_rearms() {
        let mut book = AlertBook::new();

        assert_eq!(book.apply("ASML", -5.0, THRESHOLD), Outcome::Fired);
        assert_eq!(book.apply("ASML", -1.05, THRESHOLD), Outcome::Reset);
        assert_eq!(book.state("ASML"), Some(AlertState::Normal));

        // Re-armed: the next breach fires again.
        assert_eq!(book.apply("ASML", -4.5, THRESHOLD), Outcome::Fired);
    }

    #[test]
    fn unbreached_normal_is_steady() {
        let mut book = AlertBook::new();

        assert_eq!(book.apply("GOOG", 1.3, THRESHOLD), Outcome::Steady);
        assert_eq!(book.apply("GOOG", -3.99, THRESHOLD), Outcome::Steady);
        assert_eq!(book.state("GOOG"), Some(AlertState::Normal));
    }

    #[test]
    fn threshold_equality_counts_as_breach() {
        let mut book = AlertBook::new();

        assert_eq!(book.apply("GOOG", -4.0, THRESHOLD), Outcome::Fired);
    }

    #[test]
    fn symbols_are_independent() {
        let mut book = AlertBook::new();

        assert_eq!(book.apply("NVDA", -5.0, THRESHOLD), Outcome::Fired);
        assert_eq!(book.apply("ASML", -5.0, THRESHOLD), Outcome::Fired);
        assert_eq!(book.apply("NVDA", -5.0, THRESHOLD), Outcome::Suppressed);
        assert_eq!(book.apply("ASML", 0.5, THRESHOLD), Outcome::Reset);

        assert_eq!(book.state("NVDA"), Some(AlertState::Alerted));
        assert_eq!(book.state("ASML"), Some(AlertState::Normal));
    }

    #[test]
    fn one_entry_per_symbol_after_first_evaluation() {
        let mut book = AlertBook::new();
        assert!(book.is_empty());

        book.apply("NVDA", 0.0, THRESHOLD);
        book.apply("NVDA", -9.0, THRESHOLD);
        book.apply("NVDA", 2.0, THRESHOLD);

        assert_eq!(book.len(), 1);
    }

    #[test]
    fn unevaluated_symbol_has_no_entry() {
        let book = AlertBook::new();
        assert_eq!(book.state("GOOGL"), None);
    }
}
