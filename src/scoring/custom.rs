//! Caller-supplied scoring metrics
//!
//! A custom metric receives the fitted model, the feature matrix, the
//! ground-truth labels and optional sample weights, and computes its own
//! score. The factory passes it through as a scorer untouched, so its sign
//! convention is the caller's responsibility.

use super::estimator::Estimator;
use crate::error::Result;
use ndarray::ArrayView2;
use std::fmt;

/// Parameters every custom metric must declare
pub const REQUIRED_PARAMETERS: [&str; 4] = ["X", "y_true", "sample_weights", "model"];

/// A scoring function supplied by the caller.
pub trait CustomMetric: Send + Sync {
    fn score(
        &self,
        model: &dyn Estimator,
        x: ArrayView2<'_, f64>,
        y_true: &[f64],
        sample_weights: Option<&[f64]>,
    ) -> Result<f64>;

    /// Declared parameter names
    ///
    /// Implementations that forward to another calling convention can
    /// override this; the factory rejects metrics missing any of
    /// [`REQUIRED_PARAMETERS`].
    fn parameters(&self) -> Vec<String> {
        REQUIRED_PARAMETERS.iter().map(ToString::to_string).collect()
    }

    fn name(&self) -> &str {
        "custom"
    }
}

/// Required parameters absent from `metric`'s declaration
pub(crate) fn missing_parameters(metric: &dyn CustomMetric) -> Vec<&'static str> {
    let declared = metric.parameters();
    REQUIRED_PARAMETERS
        .into_iter()
        .filter(|required| !declared.iter().any(|p| p == required))
        .collect()
}

/// Closure-backed [`CustomMetric`]
///
/// ```ignore
/// let metric = MetricFn::new(|model, x, y_true, _weights| {
///     let pred = model.predict(x)?;
///     Ok(-pred.iter().zip(y_true).map(|(p, t)| (p - t).abs()).sum::<f64>())
/// })
/// .named("neg_total_abs_error");
/// ```
pub struct MetricFn<F> {
    name: String,
    parameters: Vec<String>,
    f: F,
}

impl<F> MetricFn<F> {
    pub fn new(f: F) -> Self
    where
        F: Fn(&dyn Estimator, ArrayView2<'_, f64>, &[f64], Option<&[f64]>) -> Result<f64>
            + Send
            + Sync,
    {
        Self {
            name: "custom".to_string(),
            parameters: REQUIRED_PARAMETERS.iter().map(ToString::to_string).collect(),
            f,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the declared parameter list
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }
}

impl<F> CustomMetric for MetricFn<F>
where
    F: Fn(&dyn Estimator, ArrayView2<'_, f64>, &[f64], Option<&[f64]>) -> Result<f64> + Send + Sync,
{
    fn score(
        &self,
        model: &dyn Estimator,
        x: ArrayView2<'_, f64>,
        y_true: &[f64],
        sample_weights: Option<&[f64]>,
    ) -> Result<f64> {
        (self.f)(model, x, y_true, sample_weights)
    }

    fn parameters(&self) -> Vec<String> {
        self.parameters.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for MetricFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricFn")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
