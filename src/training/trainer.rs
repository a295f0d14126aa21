//! The mini-batch gradient descent trainer.
//!
//! One trainer drives all three model variants; the [`LinkFn`] it is built
//! with decides what the margins mean and which diagnostic is recorded.
//!
//! # Batching Contract
//!
//! Each epoch processes `floor(n / batch_size)` contiguous batches in the
//! order the rows were received - batches are never reshuffled. Rows beyond
//! the last full batch are skipped for that epoch. This truncation is part of
//! the contract, not an error, and keeps the per-epoch row count
//! deterministic.

use ndarray::{s, Array2, ArrayView2};

use super::gradient::batch_gradient;
use super::logger::{TrainingLogger, Verbosity};
use super::schedule::{BoldDriver, CostHistory};
use super::LinkFn;

// =============================================================================
// SgdParams
// =============================================================================

/// Training configuration with named, typed fields and documented defaults.
///
/// Validated eagerly: scalar bounds at trainer construction, the
/// `batch_size <= n_samples` bound at the start of `train`, before any
/// parameter is touched.
#[derive(Debug, Clone)]
pub struct SgdParams {
    /// Initial step size. Must be > 0. Adjusted per epoch by the bold-driver
    /// rule. Default 0.0001.
    pub learning_rate: f64,

    /// Number of passes over the training data. Must be > 0. Default 1000.
    pub n_epochs: usize,

    /// Rows per gradient step. Must be in `[1, n_samples]`. Default 32.
    pub batch_size: usize,

    /// Probability threshold converting a binary classifier's output into a
    /// class label. Must be in `[0, 1]`. Only read by the binary model.
    /// Default 0.5.
    pub decision_boundary: f64,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for SgdParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.0001,
            n_epochs: 1000,
            batch_size: 32,
            decision_boundary: 0.5,
            verbosity: Verbosity::default(),
        }
    }
}

impl SgdParams {
    /// Validate the data-independent bounds.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if !(self.learning_rate > 0.0) {
            return Err(ParamValidationError::InvalidLearningRate(
                self.learning_rate,
            ));
        }
        if self.n_epochs == 0 {
            return Err(ParamValidationError::InvalidEpochs);
        }
        if self.batch_size == 0 {
            return Err(ParamValidationError::InvalidBatchSize);
        }
        if !(0.0..=1.0).contains(&self.decision_boundary) {
            return Err(ParamValidationError::InvalidDecisionBoundary(
                self.decision_boundary,
            ));
        }
        Ok(())
    }

    /// Validate everything, including the bounds that need the sample count.
    pub fn validate_for(&self, n_samples: usize) -> Result<(), ParamValidationError> {
        self.validate()?;
        if self.batch_size > n_samples {
            return Err(ParamValidationError::BatchSizeExceedsSamples {
                batch_size: self.batch_size,
                n_samples,
            });
        }
        Ok(())
    }

    /// Full batches per epoch: `floor(n_samples / batch_size)`.
    pub fn batches_per_epoch(&self, n_samples: usize) -> usize {
        n_samples / self.batch_size
    }

    /// Rows actually processed per epoch; the remainder is skipped.
    pub fn rows_per_epoch(&self, n_samples: usize) -> usize {
        self.batches_per_epoch(n_samples) * self.batch_size
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValidationError {
    /// learning_rate must be > 0.
    #[error("learning_rate must be > 0, got {0}")]
    InvalidLearningRate(f64),

    /// n_epochs must be > 0.
    #[error("n_epochs must be > 0")]
    InvalidEpochs,

    /// batch_size must be >= 1.
    #[error("batch_size must be >= 1")]
    InvalidBatchSize,

    /// batch_size must not exceed the number of training samples.
    #[error("batch_size {batch_size} exceeds the number of training samples {n_samples}")]
    BatchSizeExceedsSamples { batch_size: usize, n_samples: usize },

    /// decision_boundary must be in [0, 1].
    #[error("decision_boundary must be in [0, 1], got {0}")]
    InvalidDecisionBoundary(f64),
}

// =============================================================================
// SgdTrainer
// =============================================================================

/// Parameters fitted by a training run: the terminal, immutable output.
#[derive(Debug, Clone)]
pub struct FittedParams {
    /// Parameter matrix, shape `(d+1, k)`.
    pub weights: Array2<f64>,
    /// Per-epoch diagnostics, most recent first.
    pub history: CostHistory,
}

/// Mini-batch gradient descent over a fixed link function.
#[derive(Debug, Clone)]
pub struct SgdTrainer<L: LinkFn> {
    link: L,
    params: SgdParams,
}

impl<L: LinkFn> SgdTrainer<L> {
    /// Create a trainer, rejecting invalid configuration immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ParamValidationError`] for out-of-range scalar parameters.
    pub fn new(link: L, params: SgdParams) -> Result<Self, ParamValidationError> {
        params.validate()?;
        Ok(Self { link, params })
    }

    pub fn params(&self) -> &SgdParams {
        &self.params
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    /// Run the full epoch x batch loop and return the fitted parameters.
    ///
    /// `features` must already be standardized and bias-augmented, shape
    /// `(n, d+1)`; `labels` is `(n, k)`. Parameters start at zero and are
    /// updated in place by every batch step. At each epoch end the link's
    /// cost over the full training set is recorded and the bold-driver rule
    /// adjusts the learning rate.
    ///
    /// # Errors
    ///
    /// Returns [`ParamValidationError::BatchSizeExceedsSamples`] if the
    /// configured batch size exceeds the row count.
    ///
    /// # Panics
    ///
    /// Panics if `labels` has a different row count than `features`.
    pub fn train(
        &self,
        features: ArrayView2<f64>,
        labels: ArrayView2<f64>,
    ) -> Result<FittedParams, ParamValidationError> {
        let n_samples = features.nrows();
        self.params.validate_for(n_samples)?;
        assert_eq!(
            labels.nrows(),
            n_samples,
            "label rows ({}) must match feature rows ({})",
            labels.nrows(),
            n_samples
        );

        let n_outputs = labels.ncols();
        let mut weights = Array2::<f64>::zeros((features.ncols(), n_outputs));
        let mut learning_rate = self.params.learning_rate;
        let mut history = CostHistory::new();
        let schedule = BoldDriver::default();

        let batch_size = self.params.batch_size;
        let n_batches = self.params.batches_per_epoch(n_samples);

        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(self.params.n_epochs);

        for epoch in 0..self.params.n_epochs {
            for batch in 0..n_batches {
                let start = batch * batch_size;
                let end = start + batch_size;

                // Per-batch temporaries (guesses, residual, gradient) live
                // only inside this call and are freed before the next batch,
                // on every exit path.
                let gradient = batch_gradient(
                    &self.link,
                    features.slice(s![start..end, ..]),
                    weights.view(),
                    labels.slice(s![start..end, ..]),
                );
                weights.scaled_add(-learning_rate, &gradient);
            }

            // Diagnostic over the full training set, not the last batch.
            let mut guesses = features.dot(&weights);
            self.link.transform(&mut guesses);
            let cost = self.link.cost(guesses.view(), labels);

            history.record(cost);
            learning_rate = schedule.adjust(&history, learning_rate);
            logger.log_epoch(epoch, &[("cost", cost), ("learning_rate", learning_rate)]);
        }

        logger.finish_training();
        Ok(FittedParams { weights, history })
    }
}

// =============================================================================
// Tests
// =============================================================================
