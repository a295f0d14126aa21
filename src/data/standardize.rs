//! Feature standardization with a bias column.
//!
//! Statistics (per-column mean and population variance) are captured from the
//! training features by [`Standardizer::fit`] and are immutable afterwards.
//! Every later transform reuses them, which guarantees that prediction and
//! evaluation inputs are mapped through exactly the same affine change of
//! coordinates as the training set.

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Feature width at transform time differs from the width captured at fit time.
///
/// Raised instead of silently misaligning columns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("feature width mismatch: fitted on {expected} features, got {actual}")]
pub struct DimensionMismatch {
    /// Feature count the standardizer was fitted on.
    pub expected: usize,
    /// Feature count of the offending input.
    pub actual: usize,
}

/// Per-column standardization statistics plus the bias-column augmentation.
///
/// # Zero-Variance Columns
///
/// A column whose values are all equal has variance 0. Its variance is
/// remapped to 1 at fit time, so the column standardizes to exactly 0.0 for
/// every row rather than dividing by zero and propagating NaN.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use regressors::Standardizer;
///
/// let train = array![[1.0, 10.0], [3.0, 30.0]];
/// let (standardizer, processed) = Standardizer::fit_transform(train.view());
///
/// // Bias column prepended: (2, 2) -> (2, 3)
/// assert_eq!(processed.dim(), (2, 3));
/// assert_eq!(processed[[0, 0]], 1.0);
///
/// // Later inputs are mapped with the captured statistics.
/// let test = array![[2.0, 20.0]];
/// let mapped = standardizer.transform(test.view()).unwrap();
/// assert_eq!(mapped[[0, 1]], 0.0); // 2.0 is the training mean of column 0
/// ```
#[derive(Debug, Clone)]
pub struct Standardizer {
    mean: Array1<f64>,
    variance: Array1<f64>,
}

impl Standardizer {
    /// Capture per-column mean and population variance from training features.
    ///
    /// Zero variances are remapped to 1 before they can be used as divisors.
    ///
    /// # Panics
    ///
    /// Panics if `features` has no rows.
    pub fn fit(features: ArrayView2<f64>) -> Self {
        let n_samples = features.nrows();
        assert!(
            n_samples > 0,
            "cannot fit a standardizer on an empty feature matrix"
        );

        let mean = features.sum_axis(Axis(0)) / n_samples as f64;
        let centered = &features - &mean;
        let mut variance = centered.mapv(|v| v * v).sum_axis(Axis(0)) / n_samples as f64;

        // Constant columns standardize to 0, not NaN.
        variance.mapv_inplace(|v| if v == 0.0 { 1.0 } else { v });

        Self { mean, variance }
    }

    /// Fit on training features and transform them in one step.
    ///
    /// This is the only path that computes statistics; every later call goes
    /// through [`transform`](Self::transform) with the stored values.
    pub fn fit_transform(features: ArrayView2<f64>) -> (Self, Array2<f64>) {
        let standardizer = Self::fit(features);
        let processed = standardizer.apply(features);
        (standardizer, processed)
    }

    /// Standardize with the stored statistics and prepend the bias column.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if the input width differs from the
    /// width captured at fit time.
    pub fn transform(&self, features: ArrayView2<f64>) -> Result<Array2<f64>, DimensionMismatch> {
        if features.ncols() != self.n_features() {
            return Err(DimensionMismatch {
                expected: self.n_features(),
                actual: features.ncols(),
            });
        }
        Ok(self.apply(features))
    }

    /// Number of raw feature columns the statistics were captured from.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Per-column training means.
    pub fn mean(&self) -> ArrayView1<f64> {
        self.mean.view()
    }

    /// Per-column training variances (zero entries already remapped to 1).
    pub fn variance(&self) -> ArrayView1<f64> {
        self.variance.view()
    }

    /// `(x - mean) / sqrt(variance)` plus a leading column of ones.
    fn apply(&self, features: ArrayView2<f64>) -> Array2<f64> {
        let std_dev = self.variance.mapv(f64::sqrt);
        let standardized = (&features - &self.mean) / &std_dev;

        let mut processed = Array2::ones((features.nrows(), self.n_features() + 1));
        processed.slice_mut(s![.., 1..]).assign(&standardized);
        processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn standardizes_to_zero_mean_unit_variance() {
        let features = array![[1.0], [2.0], [3.0], [4.0]];
        let (_, processed) = Standardizer::fit_transform(features.view());

        let column = processed.column(1);
        let mean: f64 = column.sum() / 4.0;
        let variance: f64 = column.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / 4.0;

        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(variance, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn bias_column_is_all_ones() {
        let features = array![[1.0, 5.0], [2.0, 6.0], [3.0, 7.0]];
        let (_, processed) = Standardizer::fit_transform(features.view());

        assert_eq!(processed.dim(), (3, 3));
        for &v in processed.column(0).iter() {
            assert_eq!(v, 1.0);
        }
    }

    #[test]
    fn transform_is_idempotent_after_fit() {
        let train = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let standardizer = Standardizer::fit(train.view());

        let first = standardizer.transform(train.view()).unwrap();
        let second = standardizer.transform(train.view()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn stored_statistics_reused_for_new_data() {
        let train = array![[0.0], [2.0]]; // mean 1, variance 1
        let standardizer = Standardizer::fit(train.view());

        let test = array![[3.0]];
        let mapped = standardizer.transform(test.view()).unwrap();

        // (3 - 1) / 1 = 2, regardless of the test data's own distribution
        assert_abs_diff_eq!(mapped[[0, 1]], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_variance_column_maps_to_zero_not_nan() {
        let features = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let (standardizer, processed) = Standardizer::fit_transform(features.view());

        assert_eq!(standardizer.variance()[0], 1.0);
        for &v in processed.column(1).iter() {
            assert_eq!(v, 0.0);
            assert!(!v.is_nan());
        }
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let train = array![[1.0, 2.0], [3.0, 4.0]];
        let standardizer = Standardizer::fit(train.view());

        let narrow = array![[1.0], [2.0]];
        let err = standardizer.transform(narrow.view()).unwrap_err();
        assert_eq!(err, DimensionMismatch { expected: 2, actual: 1 });
    }
}
