//! Regression metrics (weighted)

use super::validate::{check_consistent_length, weighted_mean, weights_or_ones};
use crate::error::{Error, Result};

fn prepare(y_true: &[f64], y_pred: &[f64], sample_weight: Option<&[f64]>) -> Result<Vec<f64>> {
    check_consistent_length(y_true.len(), y_pred.len(), sample_weight)?;
    Ok(weights_or_ones(sample_weight, y_true.len()))
}

/// 1 - num/den, with constant targets scoring 1.0 on a perfect fit and 0.0
/// otherwise
fn finite_ratio_score(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        if num == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - num / den
    }
}

/// Mean Squared Error
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64], sample_weight: Option<&[f64]>) -> Result<f64> {
    let w = prepare(y_true, y_pred, sample_weight)?;
    weighted_mean(y_true.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)), &w)
}

/// Root Mean Squared Error
pub fn root_mean_squared_error(
    y_true: &[f64],
    y_pred: &[f64],
    sample_weight: Option<&[f64]>,
) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred, sample_weight)?.sqrt())
}

/// Mean Absolute Error
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64], sample_weight: Option<&[f64]>) -> Result<f64> {
    let w = prepare(y_true, y_pred, sample_weight)?;
    weighted_mean(y_true.iter().zip(y_pred).map(|(t, p)| (t - p).abs()), &w)
}

/// R² coefficient of determination
pub fn r2_score(y_true: &[f64], y_pred: &[f64], sample_weight: Option<&[f64]>) -> Result<f64> {
    let w = prepare(y_true, y_pred, sample_weight)?;
    if y_true.len() < 2 {
        return Err(Error::Scoring(
            "R^2 score is not well-defined with less than two samples".into(),
        ));
    }
    let mean = weighted_mean(y_true.iter().copied(), &w)?;
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .zip(&w)
        .map(|((t, p), w)| w * (t - p).powi(2))
        .sum();
    let ss_tot: f64 = y_true.iter().zip(&w).map(|(t, w)| w * (t - mean).powi(2)).sum();
    Ok(finite_ratio_score(ss_res, ss_tot))
}
