//! Diagnostic history and the bold-driver learning-rate rule.

use std::collections::VecDeque;

/// Ordered per-epoch diagnostics, most recent first.
///
/// One value is pushed to the front at every epoch end; the history is never
/// truncated during training. Index 0 is the newest epoch, which is what the
/// bold-driver rule and external reporting consume.
#[derive(Debug, Clone, Default)]
pub struct CostHistory {
    values: VecDeque<f64>,
}

impl CostHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push this epoch's diagnostic to the front.
    pub fn record(&mut self, cost: f64) {
        self.values.push_front(cost);
    }

    /// Most recent epoch's diagnostic.
    pub fn latest(&self) -> Option<f64> {
        self.values.front().copied()
    }

    /// Diagnostic from the epoch before the most recent one.
    pub fn previous(&self) -> Option<f64> {
        self.values.get(1).copied()
    }

    /// Number of recorded epochs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether any epoch has been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// The bold-driver step-size heuristic.
///
/// After each epoch's diagnostic is recorded: if the newest value is worse
/// (greater) than the previous one, the learning rate is multiplied by
/// `backoff`; otherwise by `growth`. No adjustment happens until two epochs
/// have recorded a diagnostic.
#[derive(Debug, Clone, Copy)]
pub struct BoldDriver {
    /// Factor applied when the diagnostic worsened. Default 0.5.
    pub backoff: f64,
    /// Factor applied when the diagnostic held or improved. Default 1.05.
    pub growth: f64,
}

impl Default for BoldDriver {
    fn default() -> Self {
        Self {
            backoff: 0.5,
            growth: 1.05,
        }
    }
}

impl BoldDriver {
    /// Learning rate for the next epoch, given the history recorded so far.
    pub fn adjust(&self, history: &CostHistory, learning_rate: f64) -> f64 {
        match (history.latest(), history.previous()) {
            (Some(newest), Some(previous)) if newest > previous => learning_rate * self.backoff,
            (Some(_), Some(_)) => learning_rate * self.growth,
            _ => learning_rate,
        }
    }
}
