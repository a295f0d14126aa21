//! regressors: mini-batch gradient descent for tabular models.
//!
//! One shared training engine drives three model variants: ordinary
//! least-squares regression, binary logistic regression, and multinomial
//! (softmax) regression. The variants differ only in their link function and
//! diagnostic cost; the gradient, the epoch loop, and the adaptive step-size
//! rule are identical.
//!
//! # Key Types
//!
//! - [`LinearRegression`] / [`BinaryLogisticRegression`] /
//!   [`MultinomialLogisticRegression`] - High-level models with fit/predict/score
//! - [`SgdParams`] - Validated training configuration
//! - [`SgdTrainer`] / [`LinkFn`] - The generic engine and its link seam
//! - [`Standardizer`] - Feature standardization with a bias column
//! - [`CostHistory`] / [`BoldDriver`] - Per-epoch diagnostics and the
//!   adaptive learning-rate rule
//!
//! # Data Conventions
//!
//! Features and labels are dense row-major `ndarray::Array2<f64>`. Labels are
//! `(n, 1)` for regression and binary classification, and one-hot `(n, k)`
//! for multinomial classification. Data loading, shuffling, and train/test
//! splitting happen upstream; this crate consumes already-numeric matrices.
//!
//! # Training
//!
//! Use a model's `fit` with an [`SgdParams`], then `predict`/`score`:
//!
//! ```ignore
//! use regressors::{LinearRegression, SgdParams};
//!
//! let params = SgdParams { learning_rate: 0.05, n_epochs: 60, batch_size: 50, ..Default::default() };
//! let model = LinearRegression::fit(features.view(), labels.view(), params)?;
//! let r2 = model.score(test_features.view(), test_labels.view())?;
//! ```

pub mod data;
pub mod model;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{
    BinaryLogisticRegression, LinearRegression, ModelError, MultinomialLogisticRegression,
};

// Training engine types
pub use training::{
    BoldDriver, CostHistory, FittedParams, Identity, LinkFn, MetricError, ParamValidationError,
    SgdParams, SgdTrainer, Sigmoid, Softmax, TrainingLogger, Verbosity,
};

// Data preparation types
pub use data::{DimensionMismatch, Standardizer};
