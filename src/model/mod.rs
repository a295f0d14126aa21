//! User-facing regression models.
//!
//! Each model wraps the same pipeline: fit a [`Standardizer`] over the raw
//! features, run the shared mini-batch trainer with the appropriate link
//! function, and keep the fitted standardizer, weights, and diagnostic
//! history together so prediction always sees the training-time statistics.
//!
//! [`Standardizer`]: crate::data::Standardizer

mod linear;
mod logistic;
mod softmax;

pub use linear::LinearRegression;
pub use logistic::BinaryLogisticRegression;
pub use softmax::MultinomialLogisticRegression;

use crate::data::DimensionMismatch;
use crate::training::{MetricError, ParamValidationError};

/// Any error a model operation can produce.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Params(#[from] ParamValidationError),

    #[error(transparent)]
    Dimension(#[from] DimensionMismatch),

    #[error(transparent)]
    Metric(#[from] MetricError),
}
