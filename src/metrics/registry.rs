//! Read-only lookup table of named metrics
//!
//! Each entry maps a name to the metric's raw, unsigned score function.
//! Sign handling belongs to the scorer built on top; a descriptor only
//! records which orientation is natural for the metric.

use super::classification::{accuracy_score, f1_score, precision_score, recall_score, Average};
use super::prediction::Prediction;
use super::probabilistic::{log_loss, roc_auc_ovr_score, roc_auc_score};
use super::regression::{mean_absolute_error, mean_squared_error, r2_score, root_mean_squared_error};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Raw score function: `(y_true, y_pred, sample_weights) -> score`
pub type ScoreFn = Arc<dyn Fn(&[f64], &Prediction, Option<&[f64]>) -> Result<f64> + Send + Sync>;

/// Family a metric belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Compares predicted labels with true labels
    Classification,
    /// Consumes decision scores or class probabilities
    Probabilistic,
    /// Compares continuous outputs
    Regression,
}

/// A registered metric
#[derive(Clone)]
pub struct MetricDescriptor {
    name: String,
    kind: MetricKind,
    greater_is_better: bool,
    score_fn: ScoreFn,
}

impl MetricDescriptor {
    /// Describe a metric by its raw score function
    pub fn new<F>(name: impl Into<String>, kind: MetricKind, greater_is_better: bool, score_fn: F) -> Self
    where
        F: Fn(&[f64], &Prediction, Option<&[f64]>) -> Result<f64> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind,
            greater_is_better,
            score_fn: Arc::new(score_fn),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Natural orientation of the raw score
    pub fn greater_is_better(&self) -> bool {
        self.greater_is_better
    }

    /// Shared handle to the raw score function
    pub fn score_fn(&self) -> ScoreFn {
        Arc::clone(&self.score_fn)
    }

    /// Evaluate the raw score function
    pub fn score(&self, y_true: &[f64], y_pred: &Prediction, sample_weight: Option<&[f64]>) -> Result<f64> {
        (self.score_fn)(y_true, y_pred, sample_weight)
    }
}

impl fmt::Debug for MetricDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("greater_is_better", &self.greater_is_better)
            .finish_non_exhaustive()
    }
}

/// Adapt a `(y_true, y_pred_values, weights)` metric to the registry shape.
fn on_values<F>(f: F) -> impl Fn(&[f64], &Prediction, Option<&[f64]>) -> Result<f64> + Send + Sync + 'static
where
    F: Fn(&[f64], &[f64], Option<&[f64]>) -> Result<f64> + Send + Sync + 'static,
{
    move |y_true: &[f64], y_pred: &Prediction, w: Option<&[f64]>| f(y_true, y_pred.values()?, w)
}

fn roc_auc_any(y_true: &[f64], y_pred: &Prediction, w: Option<&[f64]>) -> Result<f64> {
    match y_pred {
        Prediction::Values(scores) => roc_auc_score(y_true, scores, w),
        Prediction::Probabilities(proba) => roc_auc_ovr_score(y_true, proba.view(), w),
    }
}

/// Name → metric lookup table
#[derive(Clone, Debug)]
pub struct MetricRegistry {
    metrics: BTreeMap<String, MetricDescriptor>,
}

impl MetricRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            metrics: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in metrics
    pub fn with_defaults() -> Self {
        use MetricKind::{Classification, Probabilistic, Regression};

        let mut registry = Self::new();

        registry.register(MetricDescriptor::new("accuracy", Classification, true, on_values(accuracy_score)));

        for (suffix, average) in [
            ("", Average::Binary),
            ("_macro", Average::Macro),
            ("_micro", Average::Micro),
            ("_weighted", Average::Weighted),
        ] {
            registry.register(MetricDescriptor::new(
                format!("precision{suffix}"),
                Classification,
                true,
                on_values(move |t: &[f64], p: &[f64], w: Option<&[f64]>| precision_score(t, p, average, w)),
            ));
            registry.register(MetricDescriptor::new(
                format!("recall{suffix}"),
                Classification,
                true,
                on_values(move |t: &[f64], p: &[f64], w: Option<&[f64]>| recall_score(t, p, average, w)),
            ));
            registry.register(MetricDescriptor::new(
                format!("f1{suffix}"),
                Classification,
                true,
                on_values(move |t: &[f64], p: &[f64], w: Option<&[f64]>| f1_score(t, p, average, w)),
            ));
        }

        registry.register(MetricDescriptor::new("roc_auc", Probabilistic, true, on_values(roc_auc_score)));
        registry.register(MetricDescriptor::new("roc_auc_ovr", Probabilistic, true, roc_auc_any));
        registry.register(MetricDescriptor::new("neg_log_loss", Probabilistic, false, log_loss));

        registry.register(MetricDescriptor::new("r2", Regression, true, on_values(r2_score)));
        registry.register(MetricDescriptor::new(
            "neg_mean_squared_error",
            Regression,
            false,
            on_values(mean_squared_error),
        ));
        registry.register(MetricDescriptor::new(
            "neg_root_mean_squared_error",
            Regression,
            false,
            on_values(root_mean_squared_error),
        ));
        registry.register(MetricDescriptor::new(
            "neg_mean_absolute_error",
            Regression,
            false,
            on_values(mean_absolute_error),
        ));

        registry
    }

    /// Add or replace a metric, returning the one it replaced
    pub fn register(&mut self, descriptor: MetricDescriptor) -> Option<MetricDescriptor> {
        self.metrics.insert(descriptor.name.clone(), descriptor)
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    /// Look up the descriptor for `name`
    pub fn get(&self, name: &str) -> Option<&MetricDescriptor> {
        self.metrics.get(name)
    }

    /// Raw score function for `name`
    pub fn resolve(&self, name: &str) -> Result<ScoreFn> {
        self.get(name)
            .map(MetricDescriptor::score_fn)
            .ok_or_else(|| Error::InvalidArgument(format!("{name} is not a valid metric name.")))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
