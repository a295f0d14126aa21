//! Multinomial logistic regression with softmax link and one-hot labels.

use ndarray::{Array2, ArrayView2};

use super::ModelError;
use crate::data::Standardizer;
use crate::training::{metrics, CostHistory, LinkFn, SgdParams, SgdTrainer, Softmax};
use crate::utils::argmax;

/// Multi-class classifier over `k >= 2` classes, trained on one-hot labels
/// and predicting class indices by row-wise argmax.
#[derive(Debug, Clone)]
pub struct MultinomialLogisticRegression {
    standardizer: Standardizer,
    weights: Array2<f64>,
    history: CostHistory,
}

impl MultinomialLogisticRegression {
    /// Fit on raw features, shape `(n, d)`, and one-hot labels, shape
    /// `(n, k)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Params`] for invalid training configuration.
    ///
    /// # Panics
    ///
    /// Panics if the labels have fewer than two columns.
    pub fn fit(
        features: ArrayView2<f64>,
        labels: ArrayView2<f64>,
        params: SgdParams,
    ) -> Result<Self, ModelError> {
        assert!(
            labels.ncols() >= 2,
            "one-hot labels need at least 2 classes, got {}",
            labels.ncols()
        );

        let trainer = SgdTrainer::new(Softmax, params)?;
        let (standardizer, processed) = Standardizer::fit_transform(features);
        let fitted = trainer.train(processed.view(), labels)?;

        Ok(Self {
            standardizer,
            weights: fitted.weights,
            history: fitted.history,
        })
    }

    /// Per-class probabilities, shape `(n, k)`. Each row sums to 1.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Dimension`] when the feature width differs from
    /// the training data.
    pub fn predict_proba(&self, features: ArrayView2<f64>) -> Result<Array2<f64>, ModelError> {
        let processed = self.standardizer.transform(features)?;
        let mut margins = processed.dot(&self.weights);
        Softmax.transform(&mut margins);
        Ok(margins)
    }

    /// Predicted class index per row, the argmax of each probability row.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Dimension`] on a feature width mismatch.
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Vec<usize>, ModelError> {
        let probabilities = self.predict_proba(features)?;
        Ok(probabilities.rows().into_iter().map(argmax).collect())
    }

    /// Fraction of rows whose predicted class matches the one-hot labels.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Dimension`] on a feature width mismatch.
    pub fn score(
        &self,
        features: ArrayView2<f64>,
        labels: ArrayView2<f64>,
    ) -> Result<f64, ModelError> {
        let predicted = self.predict(features)?;
        Ok(metrics::multiclass_accuracy(&predicted, labels))
    }

    /// Fitted parameter matrix, shape `(d+1, k)`. Row 0 holds the per-class
    /// bias terms.
    pub fn weights(&self) -> ArrayView2<f64> {
        self.weights.view()
    }

    /// Per-epoch cross-entropy, most recent first.
    pub fn cost_history(&self) -> &CostHistory {
        &self.history
    }

    /// Number of classes the model was trained on.
    pub fn n_classes(&self) -> usize {
        self.weights.ncols()
    }
}
