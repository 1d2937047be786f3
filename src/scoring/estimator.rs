//! Fitted model interface driven by scorers

use super::response::ResponseMethod;
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// A fitted model that scorers can query.
///
/// Only `predict` is required. Models without probability or decision
/// outputs keep the default methods, which fail with
/// [`Error::UnsupportedResponse`].
pub trait Estimator {
    /// Labels or regression outputs, one per row of `x`
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Vec<f64>>;

    /// Class probabilities, one row per sample, columns in label order
    fn predict_proba(&self, _x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        Err(Error::UnsupportedResponse {
            method: ResponseMethod::PredictProba,
        })
    }

    /// Unthresholded decision scores, one per row of `x`
    fn decision_function(&self, _x: ArrayView2<'_, f64>) -> Result<Vec<f64>> {
        Err(Error::UnsupportedResponse {
            method: ResponseMethod::DecisionFunction,
        })
    }
}
