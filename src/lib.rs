//! hyperfs: metric-to-scorer adapter for model selection
//!
//! Converts a metric specification and an optimization direction into a
//! single scoring callable whose output is comparable as "larger is better".
//!
//! # Modules
//!
//! - `scoring`: scorer factory, scorer, direction/response enums, custom metrics
//! - `metrics`: raw score functions and the named metric registry
//! - `error`: crate error type

pub mod error;
pub mod metrics;
pub mod scoring;

pub use error::{Error, Result};
pub use metrics::{MetricRegistry, Prediction};
pub use scoring::{
    create_scorer, CustomMetric, Direction, Estimator, MetricArg, MetricFn, MetricSpec,
    ResponseMethod, Scorer, ScorerConfig, ScorerFactory,
};
