//! Model output channel requested by named scorers

use super::estimator::Estimator;
use crate::error::{Error, Result};
use crate::metrics::Prediction;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which model output a named metric is evaluated against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMethod {
    /// Class probabilities
    PredictProba,
    /// Unthresholded decision scores
    DecisionFunction,
    /// Discrete predictions or regression outputs
    Predict,
}

impl ResponseMethod {
    pub const ALL: [ResponseMethod; 3] = [
        ResponseMethod::PredictProba,
        ResponseMethod::DecisionFunction,
        ResponseMethod::Predict,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMethod::PredictProba => "predict_proba",
            ResponseMethod::DecisionFunction => "decision_function",
            ResponseMethod::Predict => "predict",
        }
    }

    /// Ask `model` for this kind of output on `x`
    pub fn request(&self, model: &dyn Estimator, x: ArrayView2<'_, f64>) -> Result<Prediction> {
        match self {
            ResponseMethod::PredictProba => Ok(Prediction::from_probabilities(model.predict_proba(x)?)),
            ResponseMethod::DecisionFunction => Ok(Prediction::Values(model.decision_function(x)?)),
            ResponseMethod::Predict => Ok(Prediction::Values(model.predict(x)?)),
        }
    }
}

impl FromStr for ResponseMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "predict_proba" => Ok(ResponseMethod::PredictProba),
            "decision_function" => Ok(ResponseMethod::DecisionFunction),
            "predict" => Ok(ResponseMethod::Predict),
            other => Err(Error::InvalidArgument(format!(
                "response_method must be 'predict_proba', 'decision_function', or 'predict' \
                 when metric is a string, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ResponseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for method in ResponseMethod::ALL {
            assert_eq!(method.to_string().parse::<ResponseMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for raw in ["predict_log_proba", "score", "PREDICT", ""] {
            let err = raw.parse::<ResponseMethod>().unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
            assert!(err.to_string().contains("response_method"));
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let parsed: ResponseMethod = serde_json::from_str("\"decision_function\"").unwrap();
        assert_eq!(parsed, ResponseMethod::DecisionFunction);
    }
}
