//! Scorer artifact consumed by model-selection loops

use super::custom::CustomMetric;
use super::direction::Direction;
use super::estimator::Estimator;
use super::response::ResponseMethod;
use crate::error::Result;
use crate::metrics::ScoreFn;
use ndarray::ArrayView2;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Registry metric wrapped with a sign and a response method
#[derive(Clone)]
pub struct MetricScorer {
    name: String,
    score_fn: ScoreFn,
    direction: Direction,
    response_method: ResponseMethod,
}

impl MetricScorer {
    pub(crate) fn new(
        name: String,
        score_fn: ScoreFn,
        direction: Direction,
        response_method: ResponseMethod,
    ) -> Self {
        Self {
            name,
            score_fn,
            direction,
            response_method,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn response_method(&self) -> ResponseMethod {
        self.response_method
    }

    /// Evaluate the raw metric on the model's response and apply the sign
    pub fn score(
        &self,
        model: &dyn Estimator,
        x: ArrayView2<'_, f64>,
        y_true: &[f64],
        sample_weights: Option<&[f64]>,
    ) -> Result<f64> {
        let prediction = self.response_method.request(model, x)?;
        let raw = (self.score_fn)(y_true, &prediction, sample_weights)?;
        let score = self.direction.sign() * raw;
        trace!(metric = %self.name, raw, score, "scored model");
        Ok(score)
    }
}

impl fmt::Debug for MetricScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricScorer")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("response_method", &self.response_method)
            .finish_non_exhaustive()
    }
}

/// Normalized scoring callable
///
/// Named scorers always return "higher is better" values. Custom scorers are
/// the caller's metric returned as-is: their direction is never applied.
#[derive(Clone)]
pub enum Scorer {
    Metric(MetricScorer),
    Custom(Arc<dyn CustomMetric>),
}

impl Scorer {
    /// Score `model` on `(x, y_true)` with unit sample weights
    pub fn score(&self, model: &dyn Estimator, x: ArrayView2<'_, f64>, y_true: &[f64]) -> Result<f64> {
        self.score_weighted(model, x, y_true, None)
    }

    /// Score `model` on `(x, y_true)`, forwarding sample weights
    pub fn score_weighted(
        &self,
        model: &dyn Estimator,
        x: ArrayView2<'_, f64>,
        y_true: &[f64],
        sample_weights: Option<&[f64]>,
    ) -> Result<f64> {
        match self {
            Scorer::Metric(scorer) => scorer.score(model, x, y_true, sample_weights),
            Scorer::Custom(metric) => metric.score(model, x, y_true, sample_weights),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Scorer::Metric(scorer) => scorer.name(),
            Scorer::Custom(metric) => metric.name(),
        }
    }

    /// Response method of a named scorer
    pub fn response_method(&self) -> Option<ResponseMethod> {
        match self {
            Scorer::Metric(scorer) => Some(scorer.response_method()),
            Scorer::Custom(_) => None,
        }
    }

    /// Sign applied to the raw metric; `None` for custom metrics
    pub fn sign(&self) -> Option<f64> {
        match self {
            Scorer::Metric(scorer) => Some(scorer.direction().sign()),
            Scorer::Custom(_) => None,
        }
    }

    /// Whether the underlying raw metric is maximized; `None` for custom metrics
    pub fn greater_is_better(&self) -> Option<bool> {
        match self {
            Scorer::Metric(scorer) => Some(scorer.direction().greater_is_better()),
            Scorer::Custom(_) => None,
        }
    }

    /// The caller's metric, when this scorer wraps one
    pub fn as_custom(&self) -> Option<&Arc<dyn CustomMetric>> {
        match self {
            Scorer::Custom(metric) => Some(metric),
            Scorer::Metric(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Scorer::Custom(_))
    }
}

impl fmt::Debug for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scorer::Metric(scorer) => fmt::Debug::fmt(scorer, f),
            Scorer::Custom(metric) => f.debug_tuple("Custom").field(&metric.name()).finish(),
        }
    }
}
