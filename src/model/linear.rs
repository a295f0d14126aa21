//! Linear regression with identity link and mean squared error diagnostic.

use ndarray::{Array2, ArrayView2};

use super::ModelError;
use crate::data::Standardizer;
use crate::training::{metrics, CostHistory, Identity, SgdParams, SgdTrainer};

/// Least-squares regression fitted by mini-batch gradient descent.
///
/// A fitted model owns the standardizer computed from its training features;
/// every later input goes through the same transformation before the weights
/// are applied.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    standardizer: Standardizer,
    weights: Array2<f64>,
    history: CostHistory,
}

impl LinearRegression {
    /// Fit on raw features, shape `(n, d)`, and targets, shape `(n, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Params`] for invalid training configuration.
    pub fn fit(
        features: ArrayView2<f64>,
        labels: ArrayView2<f64>,
        params: SgdParams,
    ) -> Result<Self, ModelError> {
        let trainer = SgdTrainer::new(Identity, params)?;
        let (standardizer, processed) = Standardizer::fit_transform(features);
        let fitted = trainer.train(processed.view(), labels)?;

        Ok(Self {
            standardizer,
            weights: fitted.weights,
            history: fitted.history,
        })
    }

    /// Predict targets for raw features, shape `(n, d)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Dimension`] when the feature width differs from
    /// the training data.
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Array2<f64>, ModelError> {
        let processed = self.standardizer.transform(features)?;
        Ok(processed.dot(&self.weights))
    }

    /// Coefficient of determination over a labeled set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Metric`] when the labels are constant, or
    /// [`ModelError::Dimension`] on a feature width mismatch.
    pub fn score(
        &self,
        features: ArrayView2<f64>,
        labels: ArrayView2<f64>,
    ) -> Result<f64, ModelError> {
        let guesses = self.predict(features)?;
        Ok(metrics::r_squared(guesses.view(), labels)?)
    }

    /// Fitted parameter matrix, shape `(d+1, 1)`. Row 0 is the bias term.
    pub fn weights(&self) -> ArrayView2<f64> {
        self.weights.view()
    }

    /// Per-epoch mean squared error, most recent first.
    pub fn cost_history(&self) -> &CostHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::Verbosity;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn params() -> SgdParams {
        SgdParams {
            learning_rate: 0.1,
            n_epochs: 100,
            batch_size: 4,
            verbosity: Verbosity::Silent,
            ..Default::default()
        }
    }

    #[test]
    fn recovers_exact_line() {
        let features = array![[1.0], [2.0], [3.0], [4.0]];
        let labels = array![[3.0], [5.0], [7.0], [9.0]];

        let model = LinearRegression::fit(features.view(), labels.view(), params()).unwrap();
        let guesses = model.predict(features.view()).unwrap();

        for (guess, label) in guesses.iter().zip(labels.iter()) {
            assert_abs_diff_eq!(guess, label, epsilon = 0.05);
        }
    }

    #[test]
    fn weight_shape_includes_bias_row() {
        let features = array![[1.0, 5.0], [2.0, 6.0], [3.0, 7.0], [4.0, 9.0]];
        let labels = array![[1.0], [2.0], [3.0], [4.0]];

        let model = LinearRegression::fit(features.view(), labels.view(), params()).unwrap();
        assert_eq!(model.weights().dim(), (3, 1));
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let features = array![[1.0], [2.0], [3.0], [4.0]];
        let labels = array![[1.0], [2.0], [3.0], [4.0]];

        let model = LinearRegression::fit(features.view(), labels.view(), params()).unwrap();
        let wide = array![[1.0, 2.0]];
        assert!(matches!(
            model.predict(wide.view()),
            Err(ModelError::Dimension(_))
        ));
    }

    #[test]
    fn history_runs_most_recent_first() {
        let features = array![[1.0], [2.0], [3.0], [4.0]];
        let labels = array![[2.0], [4.0], [6.0], [8.0]];

        let model = LinearRegression::fit(features.view(), labels.view(), params()).unwrap();
        let history = model.cost_history();
        assert_eq!(history.len(), 100);
        assert!(history.latest().unwrap() < history.iter().last().unwrap());
    }
}
