//! Classification metrics
//!
//! Provides weighted multi-class classification metrics including:
//! - Confusion matrix over the observed label set
//! - Per-class precision, recall, F1
//! - Binary, macro, micro, and weighted averaging
//! - Accuracy

mod average;
mod confusion;
mod metrics;
mod scores;


pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use metrics::MultiClassMetrics;
pub use scores::{accuracy_score, f1_score, precision_score, recall_score};
