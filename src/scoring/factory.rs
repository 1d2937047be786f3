//! Scorer construction from a metric specification
//!
//! Validation is all-or-nothing and runs in a fixed order:
//!
//! 1. direction
//! 2. response method (name-based metrics only)
//! 3. registry lookup for names
//! 4. declared parameters for custom metrics
//! 5. anything else is a type error
//!
//! Direction is only applied to named metrics. A custom metric is returned
//! exactly as given, whatever the direction.

use super::config::ScorerConfig;
use super::custom::{missing_parameters, CustomMetric};
use super::direction::Direction;
use super::response::ResponseMethod;
use super::scorer::{MetricScorer, Scorer};
use crate::error::{Error, Result};
use crate::metrics::MetricRegistry;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// What to score with: a registered metric name or a custom metric
#[derive(Clone)]
pub enum MetricSpec {
    Name(String),
    Custom(Arc<dyn CustomMetric>),
}

impl MetricSpec {
    /// Wrap a custom metric
    pub fn custom(metric: impl CustomMetric + 'static) -> Self {
        MetricSpec::Custom(Arc::new(metric))
    }
}

impl From<&str> for MetricSpec {
    fn from(name: &str) -> Self {
        MetricSpec::Name(name.to_string())
    }
}

impl From<String> for MetricSpec {
    fn from(name: String) -> Self {
        MetricSpec::Name(name)
    }
}

impl From<Arc<dyn CustomMetric>> for MetricSpec {
    fn from(metric: Arc<dyn CustomMetric>) -> Self {
        MetricSpec::Custom(metric)
    }
}

impl fmt::Debug for MetricSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricSpec::Name(name) => f.debug_tuple("Name").field(name).finish(),
            MetricSpec::Custom(metric) => f.debug_tuple("Custom").field(&metric.name()).finish(),
        }
    }
}

/// Metric argument as received from untyped input
#[derive(Clone)]
pub enum MetricArg {
    Name(String),
    Custom(Arc<dyn CustomMetric>),
    /// Any other value; always rejected with a type error
    Other(Value),
}

impl From<MetricSpec> for MetricArg {
    fn from(spec: MetricSpec) -> Self {
        match spec {
            MetricSpec::Name(name) => MetricArg::Name(name),
            MetricSpec::Custom(metric) => MetricArg::Custom(metric),
        }
    }
}

impl From<Value> for MetricArg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => MetricArg::Name(name),
            other => MetricArg::Other(other),
        }
    }
}

impl From<&str> for MetricArg {
    fn from(name: &str) -> Self {
        MetricArg::Name(name.to_string())
    }
}

impl From<Arc<dyn CustomMetric>> for MetricArg {
    fn from(metric: Arc<dyn CustomMetric>) -> Self {
        MetricArg::Custom(metric)
    }
}

impl fmt::Debug for MetricArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricArg::Name(name) => f.debug_tuple("Name").field(name).finish(),
            MetricArg::Custom(metric) => f.debug_tuple("Custom").field(&metric.name()).finish(),
            MetricArg::Other(value) => f.debug_tuple("Other").field(value).finish(),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds scorers against an injected metric registry
#[derive(Clone, Debug)]
pub struct ScorerFactory {
    registry: Arc<MetricRegistry>,
}

impl ScorerFactory {
    /// Create a factory owning `registry`
    pub fn new(registry: MetricRegistry) -> Self {
        Self::with_shared_registry(Arc::new(registry))
    }

    /// Create a factory over a registry shared with other components
    pub fn with_shared_registry(registry: Arc<MetricRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    /// Build a scorer from typed arguments
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an unknown metric name or a custom
    /// metric that does not declare `X`, `y_true`, `sample_weights` and
    /// `model`.
    pub fn create_scorer(
        &self,
        metric: MetricSpec,
        direction: Direction,
        response_method: ResponseMethod,
    ) -> Result<Scorer> {
        match metric {
            MetricSpec::Name(name) => self.named_scorer(name, direction, response_method),
            MetricSpec::Custom(metric) => custom_scorer(metric, direction),
        }
    }

    /// Build a scorer from untyped arguments, e.g. deserialized configuration
    ///
    /// `response_method` may be `None` for custom metrics; named metrics
    /// require one.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an unrecognized direction or response
    /// method plus every error of [`create_scorer`](Self::create_scorer);
    /// [`Error::Type`] when the metric is neither a name nor a custom metric.
    pub fn create_scorer_from_args(
        &self,
        metric: impl Into<MetricArg>,
        direction: &str,
        response_method: Option<&str>,
    ) -> Result<Scorer> {
        let direction: Direction = direction.parse()?;

        match metric.into() {
            MetricArg::Name(name) => {
                let response_method: ResponseMethod = response_method
                    .ok_or_else(|| {
                        Error::InvalidArgument(
                            "response_method must be 'predict_proba', 'decision_function', or \
                             'predict' when metric is a string"
                                .into(),
                        )
                    })?
                    .parse()?;
                self.named_scorer(name, direction, response_method)
            }
            MetricArg::Custom(metric) => custom_scorer(metric, direction),
            MetricArg::Other(value) => Err(Error::Type(format!(
                "Metric must be either a string or a callable, got {} {value}",
                value_kind(&value)
            ))),
        }
    }

    /// Build a scorer from a loaded [`ScorerConfig`]
    pub fn create_from_config(&self, config: &ScorerConfig) -> Result<Scorer> {
        self.create_scorer_from_args(
            config.metric.clone(),
            &config.direction,
            config.response_method.as_deref(),
        )
    }

    fn named_scorer(
        &self,
        name: String,
        direction: Direction,
        response_method: ResponseMethod,
    ) -> Result<Scorer> {
        let descriptor = self
            .registry
            .get(&name)
            .ok_or_else(|| Error::InvalidArgument(format!("{name} is not a valid metric name.")))?;

        if descriptor.greater_is_better() != direction.greater_is_better() {
            warn!(
                metric = %name,
                %direction,
                "direction disagrees with the metric's natural orientation"
            );
        }
        debug!(metric = %name, %direction, %response_method, "created metric scorer");

        Ok(Scorer::Metric(MetricScorer::new(
            name,
            descriptor.score_fn(),
            direction,
            response_method,
        )))
    }
}

impl Default for ScorerFactory {
    fn default() -> Self {
        Self::new(MetricRegistry::default())
    }
}

fn custom_scorer(metric: Arc<dyn CustomMetric>, direction: Direction) -> Result<Scorer> {
    let missing = missing_parameters(metric.as_ref());
    if !missing.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "Metric callable must have 'X', 'y_true', 'sample_weights' and 'model' as parameters \
             (missing: {})",
            missing.join(", ")
        )));
    }

    // Custom metrics keep their own sign.
    if direction == Direction::Minimize {
        warn!(
            metric = metric.name(),
            "direction 'minimize' is not applied to custom metrics; scores are returned unchanged"
        );
    }
    debug!(metric = metric.name(), "using custom metric as scorer");

    Ok(Scorer::Custom(metric))
}

/// Build a scorer against the built-in metric registry
///
/// Shorthand for `ScorerFactory::default().create_scorer(...)`.
pub fn create_scorer(
    metric: impl Into<MetricSpec>,
    direction: Direction,
    response_method: ResponseMethod,
) -> Result<Scorer> {
    ScorerFactory::default().create_scorer(metric.into(), direction, response_method)
}
