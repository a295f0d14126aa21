//! Training diagnostics and evaluation metrics.
//!
//! Diagnostics (MSE, cross-entropy) are recorded once per epoch over the full
//! training set and feed the bold-driver rule. Evaluation metrics (R²,
//! accuracy) score a trained model on held-out data. They are kept separate
//! from the link functions - a model trains against one cost but may be
//! evaluated with a different metric.
//!
//! All accumulation is in f64; cross-entropy adds [`LOG_EPS`] inside every
//! logarithm so saturated probabilities never produce `ln(0)`.

use ndarray::ArrayView2;

use crate::utils::argmax;

/// Epsilon added inside every `ln` argument in the cross-entropy costs.
pub const LOG_EPS: f64 = 1e-7;

/// Evaluation metric failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    /// R² is undefined when the labels have zero variance (`SS_tot = 0`).
    #[error("R^2 is undefined: labels have zero variance")]
    UndefinedMetric,
}

// =============================================================================
// Training diagnostics
// =============================================================================

/// Mean squared error: squared residuals summed over all entries, divided by
/// the number of rows.
pub fn mean_squared_error(predictions: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64 {
    debug_assert_eq!(predictions.dim(), labels.dim());
    let n_rows = predictions.nrows();
    if n_rows == 0 {
        return 0.0;
    }

    let sum_sq: f64 = predictions
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| (p - y) * (p - y))
        .sum();
    sum_sq / n_rows as f64
}

/// Binary cross-entropy: `-(yᵀ·ln(p+ε) + (1-y)ᵀ·ln(1-p+ε)) / n`.
///
/// With several output columns each is an independent binary task; the
/// per-column costs are summed.
pub fn binary_cross_entropy(probabilities: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64 {
    debug_assert_eq!(probabilities.dim(), labels.dim());
    let n_rows = probabilities.nrows();
    if n_rows == 0 {
        return 0.0;
    }

    let total: f64 = probabilities
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| y * (p + LOG_EPS).ln() + (1.0 - y) * (1.0 - p + LOG_EPS).ln())
        .sum();
    -total / n_rows as f64
}

/// Softmax cross-entropy: `-Σ y·ln(p+ε) / n` over one-hot labels.
///
/// Softmax rows sum to 1, so the `(1-y)` term of the binary form carries no
/// information and is dropped.
pub fn softmax_cross_entropy(probabilities: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64 {
    debug_assert_eq!(probabilities.dim(), labels.dim());
    let n_rows = probabilities.nrows();
    if n_rows == 0 {
        return 0.0;
    }

    let total: f64 = probabilities
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| y * (p + LOG_EPS).ln())
        .sum();
    -total / n_rows as f64
}

// =============================================================================
// Evaluation metrics
// =============================================================================

/// Coefficient of determination: `R² = 1 - SS_res / SS_tot`.
///
/// # Errors
///
/// Returns [`MetricError::UndefinedMetric`] when the labels are all equal
/// (`SS_tot = 0`), instead of a NaN or infinite score.
pub fn r_squared(
    predictions: ArrayView2<f64>,
    labels: ArrayView2<f64>,
) -> Result<f64, MetricError> {
    debug_assert_eq!(predictions.dim(), labels.dim());
    assert!(!labels.is_empty(), "R^2 requires at least one label");

    let mean = labels.sum() / labels.len() as f64;
    let ss_res: f64 = predictions
        .iter()
        .zip(labels.iter())
        .map(|(&p, &y)| (y - p) * (y - p))
        .sum();
    let ss_tot: f64 = labels.iter().map(|&y| (y - mean) * (y - mean)).sum();

    if ss_tot == 0.0 {
        return Err(MetricError::UndefinedMetric);
    }
    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of thresholded predictions equal to the 0/1 labels.
pub fn binary_accuracy(predicted: ArrayView2<f64>, labels: ArrayView2<f64>) -> f64 {
    debug_assert_eq!(predicted.dim(), labels.dim());
    let total = predicted.len();
    if total == 0 {
        return 0.0;
    }

    let correct = predicted
        .iter()
        .zip(labels.iter())
        .filter(|(&p, &y)| p == y)
        .count();
    correct as f64 / total as f64
}

/// Fraction of predicted class indices matching the argmax of one-hot labels.
pub fn multiclass_accuracy(predicted: &[usize], labels: ArrayView2<f64>) -> f64 {
    assert_eq!(
        predicted.len(),
        labels.nrows(),
        "predicted class count ({}) must match label rows ({})",
        predicted.len(),
        labels.nrows()
    );
    if predicted.is_empty() {
        return 0.0;
    }

    let correct = predicted
        .iter()
        .zip(labels.rows())
        .filter(|(&class, row)| class == argmax(row.view()))
        .count();
    correct as f64 / predicted.len() as f64
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn mse_known_value() {
        let predictions = array![[1.0], [2.0], [3.0]];
        let labels = array![[1.0], [4.0], [2.0]];

        // (0 + 4 + 1) / 3
        let mse = mean_squared_error(predictions.view(), labels.view());
        assert_abs_diff_eq!(mse, 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn mse_perfect_predictions() {
        let values = array![[0.5], [1.5]];
        assert_eq!(mean_squared_error(values.view(), values.view()), 0.0);
    }

    #[test]
    fn binary_cross_entropy_known_value() {
        let probabilities = array![[0.9], [0.2]];
        let labels = array![[1.0], [0.0]];

        let expected = -((0.9f64 + LOG_EPS).ln() + (0.8f64 + LOG_EPS).ln()) / 2.0;
        let cost = binary_cross_entropy(probabilities.view(), labels.view());
        assert_abs_diff_eq!(cost, expected, epsilon = 1e-12);
    }

    #[test]
    fn cross_entropy_finite_at_saturation() {
        let probabilities = array![[0.0], [1.0]];
        let labels = array![[1.0], [0.0]];

        let cost = binary_cross_entropy(probabilities.view(), labels.view());
        assert!(cost.is_finite());
    }

    #[test]
    fn softmax_cross_entropy_known_value() {
        let probabilities = array![[0.7, 0.2, 0.1], [0.1, 0.8, 0.1]];
        let labels = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

        let expected = -((0.7f64 + LOG_EPS).ln() + (0.8f64 + LOG_EPS).ln()) / 2.0;
        let cost = softmax_cross_entropy(probabilities.view(), labels.view());
        assert_abs_diff_eq!(cost, expected, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_perfect_fit() {
        let labels = array![[1.0], [2.0], [3.0]];
        let r2 = r_squared(labels.view(), labels.view()).unwrap();
        assert_abs_diff_eq!(r2, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_mean_baseline_is_zero() {
        let labels = array![[1.0], [3.0]];
        let predictions = array![[2.0], [2.0]]; // the label mean
        let r2 = r_squared(predictions.view(), labels.view()).unwrap();
        assert_abs_diff_eq!(r2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_degenerate_labels_raise() {
        let predictions = array![[1.0], [2.0]];
        let labels = array![[5.0], [5.0]];
        assert_eq!(
            r_squared(predictions.view(), labels.view()),
            Err(MetricError::UndefinedMetric)
        );
    }

    #[test]
    fn binary_accuracy_counts_matches() {
        let predicted = array![[1.0], [0.0], [1.0], [1.0]];
        let labels = array![[1.0], [0.0], [0.0], [1.0]];
        assert_abs_diff_eq!(
            binary_accuracy(predicted.view(), labels.view()),
            0.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn multiclass_accuracy_against_one_hot() {
        let predicted = vec![0, 2, 1];
        let labels = array![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
        assert_abs_diff_eq!(
            multiclass_accuracy(&predicted, labels.view()),
            2.0 / 3.0,
            epsilon = 1e-12
        );
    }
}
