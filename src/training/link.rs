//! Link functions.
//!
//! A link maps the linear margins `X·W` into a model's output space and
//! defines the diagnostic cost recorded once per epoch. The gradient is the
//! same for all links (see [`batch_gradient`](super::batch_gradient)), which
//! is what lets one trainer drive all three model variants.

use ndarray::{Array2, ArrayView2, ArrayViewMut1};

use super::metrics;

/// A pluggable link function for the shared training engine.
///
/// `transform` maps raw margins to outputs in place; `cost` computes the
/// per-epoch diagnostic from *transformed* outputs and the labels.
pub trait LinkFn: Send + Sync {
    /// Apply the link to raw margins in place.
    fn transform(&self, margins: &mut Array2<f64>);

    /// Diagnostic cost over a full data pass.
    ///
    /// `guesses` must already be transformed through the link.
    fn cost(&self, guesses: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64;

    /// Name of the link (for logging).
    fn name(&self) -> &'static str;
}

/// Numerically plain logistic function.
#[inline]
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Apply softmax in-place to a single row of margins.
///
/// Max-shifted for numerical stability.
#[inline]
fn softmax_row_inplace(mut row: ArrayViewMut1<f64>) {
    if row.is_empty() {
        return;
    }

    let max_val = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut sum = 0.0f64;
    for x in row.iter_mut() {
        *x = (*x - max_val).exp();
        sum += *x;
    }

    if sum > 0.0 {
        for x in row.iter_mut() {
            *x /= sum;
        }
    }
}

// =============================================================================
// Identity
// =============================================================================

/// Identity link: margins are the outputs. Linear regression.
///
/// Diagnostic: mean squared error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl LinkFn for Identity {
    fn transform(&self, _margins: &mut Array2<f64>) {}

    fn cost(&self, guesses: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64 {
        metrics::mean_squared_error(guesses, labels)
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

// =============================================================================
// Sigmoid
// =============================================================================

/// Element-wise logistic link. Binary logistic regression.
///
/// Each output column is an independent probability in (0, 1).
/// Diagnostic: binary cross-entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl LinkFn for Sigmoid {
    fn transform(&self, margins: &mut Array2<f64>) {
        margins.mapv_inplace(sigmoid);
    }

    fn cost(&self, guesses: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64 {
        metrics::binary_cross_entropy(guesses, labels)
    }

    fn name(&self) -> &'static str {
        "sigmoid"
    }
}

// =============================================================================
// Softmax
// =============================================================================

/// Row-wise softmax link. Multinomial logistic regression.
///
/// Each row becomes a probability distribution over the k output columns.
/// Diagnostic: softmax cross-entropy, computed from the same link as the
/// gradient and the predictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Softmax;

impl LinkFn for Softmax {
    fn transform(&self, margins: &mut Array2<f64>) {
        for row in margins.rows_mut() {
            softmax_row_inplace(row);
        }
    }

    fn cost(&self, guesses: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64 {
        metrics::softmax_cross_entropy(guesses, labels)
    }

    fn name(&self) -> &'static str {
        "softmax"
    }
}

// =============================================================================
// Tests
// =============================================================================
