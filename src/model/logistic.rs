//! Binary logistic regression with sigmoid link.

use ndarray::{Array2, ArrayView2};

use super::ModelError;
use crate::data::Standardizer;
use crate::training::{metrics, CostHistory, LinkFn, SgdParams, SgdTrainer, Sigmoid};

/// Two-class classifier producing probabilities, thresholded into 0/1 labels
/// by the configured decision boundary.
#[derive(Debug, Clone)]
pub struct BinaryLogisticRegression {
    standardizer: Standardizer,
    weights: Array2<f64>,
    history: CostHistory,
    decision_boundary: f64,
}

impl BinaryLogisticRegression {
    /// Fit on raw features, shape `(n, d)`, and 0/1 labels, shape `(n, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Params`] for invalid training configuration,
    /// including a decision boundary outside `[0, 1]`.
    pub fn fit(
        features: ArrayView2<f64>,
        labels: ArrayView2<f64>,
        params: SgdParams,
    ) -> Result<Self, ModelError> {
        let decision_boundary = params.decision_boundary;
        let trainer = SgdTrainer::new(Sigmoid, params)?;
        let (standardizer, processed) = Standardizer::fit_transform(features);
        let fitted = trainer.train(processed.view(), labels)?;

        Ok(Self {
            standardizer,
            weights: fitted.weights,
            history: fitted.history,
            decision_boundary,
        })
    }

    /// Class-1 probabilities for raw features, shape `(n, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Dimension`] when the feature width differs from
    /// the training data.
    pub fn predict_proba(&self, features: ArrayView2<f64>) -> Result<Array2<f64>, ModelError> {
        let processed = self.standardizer.transform(features)?;
        let mut margins = processed.dot(&self.weights);
        Sigmoid.transform(&mut margins);
        Ok(margins)
    }

    /// Hard 0/1 labels, shape `(n, 1)`. A probability at or above the
    /// decision boundary maps to 1.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Dimension`] on a feature width mismatch.
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Array2<f64>, ModelError> {
        let mut probabilities = self.predict_proba(features)?;
        let boundary = self.decision_boundary;
        probabilities.mapv_inplace(|p| if p >= boundary { 1.0 } else { 0.0 });
        Ok(probabilities)
    }

    /// Fraction of correctly classified rows in a labeled set.
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
        Ok(metrics::binary_accuracy(predicted.view(), labels))
    }

    /// Fitted parameter matrix, shape `(d+1, 1)`. Row 0 is the bias term.
    pub fn weights(&self) -> ArrayView2<f64> {
        self.weights.view()
    }

    /// Per-epoch binary cross-entropy, most recent first.
    pub fn cost_history(&self) -> &CostHistory {
        &self.history
    }

    pub fn decision_boundary(&self) -> f64 {
        self.decision_boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::{ParamValidationError, Verbosity};
    use ndarray::array;

    fn params() -> SgdParams {
        SgdParams {
            learning_rate: 0.5,
            n_epochs: 100,
            batch_size: 6,
            verbosity: Verbosity::Silent,
            ..Default::default()
        }
    }

    fn separable_data() -> (Array2<f64>, Array2<f64>) {
        let features = array![[-3.0], [-2.5], [-2.0], [2.0], [2.5], [3.0]];
        let labels = array![[0.0], [0.0], [0.0], [1.0], [1.0], [1.0]];
        (features, labels)
    }

    #[test]
    fn separable_points_classified_correctly() {
        let (features, labels) = separable_data();
        let model =
            BinaryLogisticRegression::fit(features.view(), labels.view(), params()).unwrap();

        let predicted = model.predict(features.view()).unwrap();
        assert_eq!(predicted, labels);
        assert_eq!(model.score(features.view(), labels.view()).unwrap(), 1.0);
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let (features, labels) = separable_data();
        let model =
            BinaryLogisticRegression::fit(features.view(), labels.view(), params()).unwrap();

        let probabilities = model.predict_proba(features.view()).unwrap();
        for &p in probabilities.iter() {
            assert!((0.0..=1.0).contains(&p), "probability out of range: {p}");
        }
    }

    #[test]
    fn boundary_of_one_sends_everything_to_zero() {
        let (features, labels) = separable_data();
        let model = BinaryLogisticRegression::fit(
            features.view(),
            labels.view(),
            SgdParams {
                decision_boundary: 1.0,
                ..params()
            },
        )
        .unwrap();

        let predicted = model.predict(features.view()).unwrap();
        assert!(predicted.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn out_of_range_boundary_rejected() {
        let (features, labels) = separable_data();
        let err = BinaryLogisticRegression::fit(
            features.view(),
            labels.view(),
            SgdParams {
                decision_boundary: 1.5,
                ..params()
            },
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ModelError::Params(ParamValidationError::InvalidDecisionBoundary(_))
        ));
    }
}
