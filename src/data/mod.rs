//! Data preparation for training and prediction.
//!
//! The core type is [`Standardizer`], which captures per-column statistics
//! from the training features exactly once and applies them identically to
//! every later matrix (training, prediction, or held-out evaluation).
//!
//! # Layout
//!
//! All matrices are dense row-major `ndarray::Array2<f64>`: one sample per
//! row, one feature per column. After standardization the matrix gains a
//! leading bias column of ones, so a `(n, d)` input becomes `(n, d + 1)`.

mod standardize;

pub use standardize::{DimensionMismatch, Standardizer};
