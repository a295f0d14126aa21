//! The shared mini-batch gradient descent engine.
//!
//! All three model variants train through the same loop; they differ only in
//! the [`LinkFn`] plugged into it:
//!
//! - [`Identity`]: linear regression, mean squared error diagnostic
//! - [`Sigmoid`]: binary logistic regression, binary cross-entropy diagnostic
//! - [`Softmax`]: multinomial regression, softmax cross-entropy diagnostic
//!
//! ## Engine pieces
//!
//! - [`SgdTrainer`] / [`SgdParams`]: the epoch x batch loop and its validated
//!   configuration
//! - [`batch_gradient`]: the one generic gradient shared by every link
//! - [`CostHistory`] / [`BoldDriver`]: per-epoch diagnostics (most recent
//!   first) and the adaptive learning-rate rule
//! - [`TrainingLogger`] / [`Verbosity`]: progress output
//!
//! ## Metrics
//!
//! Evaluation metrics live in [`metrics`] and are separate from the training
//! diagnostics - a model is trained against one cost but may be scored with
//! another (R² or accuracy).

mod gradient;
mod link;
pub mod metrics;
mod logger;
mod schedule;
mod trainer;

pub use gradient::batch_gradient;
pub use link::{Identity, LinkFn, Sigmoid, Softmax};
pub use logger::{TrainingLogger, Verbosity};
pub use metrics::MetricError;
pub use schedule::{BoldDriver, CostHistory};
pub use trainer::{FittedParams, ParamValidationError, SgdParams, SgdTrainer};
