//! Model output handed to raw score functions

use crate::error::{Error, Result};
use ndarray::Array2;

/// Output of a model for one batch of samples.
#[derive(Clone, Debug, PartialEq)]
pub enum Prediction {
    /// One value per sample: labels, decision scores, regression outputs
    /// or the positive-class probability of a binary classifier.
    Values(Vec<f64>),
    /// Class probability matrix, one row per sample, one column per class.
    Probabilities(Array2<f64>),
}

impl Prediction {
    /// Wrap a `predict_proba` matrix.
    ///
    /// Two-column matrices collapse to the positive-class column, which is
    /// what binary metrics such as ROC AUC expect.
    pub fn from_probabilities(proba: Array2<f64>) -> Self {
        if proba.ncols() == 2 {
            Self::Values(proba.column(1).to_vec())
        } else {
            Self::Probabilities(proba)
        }
    }

    /// Borrow the 1-d values, failing for probability matrices.
    pub fn values(&self) -> Result<&[f64]> {
        match self {
            Self::Values(values) => Ok(values),
            Self::Probabilities(proba) => Err(Error::Scoring(format!(
                "expected one prediction per sample, got a probability matrix with {} columns",
                proba.ncols()
            ))),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Probabilities(proba) => proba.nrows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Prediction {
    fn from(values: Vec<f64>) -> Self {
        Self::Values(values)
    }
}
