//! Training progress logging.

use std::time::Instant;

/// Verbosity level for training output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Warnings only.
    Warning,
    /// Per-epoch metric lines.
    Info,
    /// Everything.
    Debug,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Warning
    }
}

/// Writes training progress to stderr, gated by [`Verbosity`].
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            started: None,
        }
    }

    /// Mark the start of a training run.
    pub fn start_training(&mut self, n_epochs: usize) {
        self.started = Some(Instant::now());
        if self.verbosity >= Verbosity::Info {
            eprintln!("training for {} epochs", n_epochs);
        }
    }

    /// Log one epoch's named metric values.
    pub fn log_epoch(&self, epoch: usize, metrics: &[(&str, f64)]) {
        if self.verbosity < Verbosity::Info {
            return;
        }
        let line = metrics
            .iter()
            .map(|(name, value)| format!("{}={:.6}", name, value))
            .collect::<Vec<_>>()
            .join(" ");
        eprintln!("[{}] {}", epoch, line);
    }

    /// Mark the end of a training run.
    pub fn finish_training(&self) {
        if self.verbosity >= Verbosity::Info {
            if let Some(started) = self.started {
                eprintln!("training finished in {:.2?}", started.elapsed());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_ordering() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
    }

    #[test]
    fn silent_logger_runs_through_lifecycle() {
        let mut logger = TrainingLogger::new(Verbosity::Silent);
        logger.start_training(3);
        logger.log_epoch(0, &[("cost", 1.0), ("learning_rate", 0.1)]);
        logger.finish_training();
    }
}
