//! Metric library backing named scorers
//!
//! Raw, unsigned score functions plus the read-only registry the scorer
//! factory resolves names against.
//!
//! ## Architecture
//!
//! - `classification`: weighted confusion matrix, label metrics and averaging
//! - `probabilistic`: ROC AUC and log loss over scores/probabilities
//! - `regression`: squared/absolute error, R²
//! - `registry`: name → [`MetricDescriptor`] lookup table
//!
//! ## Example
//!
//! ```ignore
//! use hyperfs::metrics::{MetricRegistry, Prediction};
//!
//! let registry = MetricRegistry::default();
//! let f1 = registry.resolve("f1_macro")?;
//! let score = f1(&[0.0, 1.0, 2.0], &Prediction::Values(vec![0.0, 2.0, 2.0]), None)?;
//! ```

pub mod classification;
mod prediction;
pub mod probabilistic;
pub mod registry;
pub mod regression;
mod validate;

#[cfg(test)]
mod sklearn_parity_tests;

pub use classification::{
    accuracy_score, f1_score, precision_score, recall_score, Average, ConfusionMatrix,
    MultiClassMetrics,
};
pub use prediction::Prediction;
pub use probabilistic::{log_loss, roc_auc_ovr_score, roc_auc_score};
pub use registry::{MetricDescriptor, MetricKind, MetricRegistry, ScoreFn};
pub use regression::{mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error};
