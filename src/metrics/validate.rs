//! Shared input checks for raw score functions

use crate::error::{Error, Result};

/// Check that targets, predictions and weights describe the same samples.
pub(crate) fn check_consistent_length(
    n_true: usize,
    n_pred: usize,
    sample_weight: Option<&[f64]>,
) -> Result<()> {
    if n_true == 0 {
        return Err(Error::Scoring("y_true is empty".into()));
    }
    if n_true != n_pred {
        return Err(Error::Scoring(format!(
            "Found input variables with inconsistent numbers of samples: [{n_true}, {n_pred}]"
        )));
    }
    if let Some(w) = sample_weight {
        if w.len() != n_true {
            return Err(Error::Scoring(format!(
                "sample_weight has {} entries, expected {n_true}",
                w.len()
            )));
        }
    }
    Ok(())
}

/// Materialize sample weights, defaulting to unit weights.
pub(crate) fn weights_or_ones(sample_weight: Option<&[f64]>, n: usize) -> Vec<f64> {
    match sample_weight {
        Some(w) => w.to_vec(),
        None => vec![1.0; n],
    }
}

/// Weighted mean of `values`; fails when the weights sum to zero.
pub(crate) fn weighted_mean(values: impl Iterator<Item = f64>, weights: &[f64]) -> Result<f64> {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(Error::Scoring("sample weights sum to zero".into()));
    }
    Ok(values.zip(weights).map(|(v, w)| v * w).sum::<f64>() / total)
}

/// Convert class labels stored as floats into integers.
///
/// Values outside the `i64` range are rejected instead of saturating.
pub(crate) fn to_labels(values: &[f64], what: &str) -> Result<Vec<i64>> {
    // 2^63; i64::MIN is the only representable value at this magnitude
    let limit = i64::MAX as f64;
    values
        .iter()
        .map(|&v| {
            if v.is_finite() && v.fract() == 0.0 && (v.abs() < limit || v == -limit) {
                Ok(v as i64)
            } else {
                Err(Error::Scoring(format!(
                    "{what} must contain integer class labels, got {v}"
                )))
            }
        })
        .collect()
}

/// Sorted distinct labels.
pub(crate) fn unique_labels(labels: &[i64]) -> Vec<i64> {
    let mut unique = labels.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
}
