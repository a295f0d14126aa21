//! The generic batch gradient.
//!
//! Every model variant reduces to the same parameter gradient; only the link
//! applied to the margins differs. Keeping a single implementation removes
//! any chance of the three variants drifting apart.

use ndarray::{Array2, ArrayView2};

use super::LinkFn;

/// Gradient of the cost with respect to the parameters, over one batch.
///
/// ```text
/// guesses  = link(features · weights)
/// residual = guesses - labels
/// gradient = featuresᵀ · residual / n_batch
/// ```
///
/// The parameter update is `weights -= learning_rate * gradient`, applied by
/// the trainer.
///
/// Shapes: `features (n, d+1)`, `weights (d+1, k)`, `labels (n, k)`;
/// the returned gradient is `(d+1, k)`.
pub fn batch_gradient<L: LinkFn + ?Sized>(
    link: &L,
    features: ArrayView2<f64>,
    weights: ArrayView2<f64>,
    labels: ArrayView2<f64>,
) -> Array2<f64> {
    debug_assert_eq!(features.nrows(), labels.nrows());
    debug_assert_eq!(features.ncols(), weights.nrows());
    debug_assert_eq!(weights.ncols(), labels.ncols());

    let mut guesses = features.dot(&weights);
    link.transform(&mut guesses);

    let residual = guesses - &labels;
    features.t().dot(&residual) / features.nrows() as f64
}
