//! Label-based classification score functions
//!
//! Labels arrive as `f64` and must be integer-valued. The positive label for
//! binary averaging is 1.

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::MultiClassMetrics;
use crate::error::{Error, Result};
use crate::metrics::validate::{check_consistent_length, to_labels};

const POS_LABEL: i64 = 1;

fn confusion(y_true: &[f64], y_pred: &[f64], sample_weight: Option<&[f64]>) -> Result<ConfusionMatrix> {
    check_consistent_length(y_true.len(), y_pred.len(), sample_weight)?;
    let y_true = to_labels(y_true, "y_true")?;
    let y_pred = to_labels(y_pred, "y_pred")?;
    ConfusionMatrix::from_predictions(&y_pred, &y_true, sample_weight)
}

/// Index of the positive label, or `None` when it is absent from a
/// single-label problem (every binary score is then 0).
fn positive_index(cm: &ConfusionMatrix) -> Result<Option<usize>> {
    if cm.n_classes() > 2 {
        return Err(Error::Scoring(
            "Target is multiclass but average='binary'. Please choose another average setting"
                .into(),
        ));
    }
    match cm.index_of(POS_LABEL) {
        Some(idx) => Ok(Some(idx)),
        None if cm.n_classes() == 2 => Err(Error::Scoring(format!(
            "pos_label={POS_LABEL} is not a valid label. It should be one of {:?}",
            cm.labels()
        ))),
        None => Ok(None),
    }
}

fn averaged(
    y_true: &[f64],
    y_pred: &[f64],
    average: Average,
    sample_weight: Option<&[f64]>,
    pick: impl Fn(&MultiClassMetrics, usize) -> f64,
    avg: impl Fn(&MultiClassMetrics, Average) -> f64,
) -> Result<f64> {
    let cm = confusion(y_true, y_pred, sample_weight)?;
    let metrics = MultiClassMetrics::from_confusion_matrix(&cm);
    match average {
        Average::Binary => Ok(positive_index(&cm)?.map_or(0.0, |idx| pick(&metrics, idx))),
        other => Ok(avg(&metrics, other)),
    }
}

/// Fraction of correctly classified samples (weighted)
pub fn accuracy_score(y_true: &[f64], y_pred: &[f64], sample_weight: Option<&[f64]>) -> Result<f64> {
    Ok(confusion(y_true, y_pred, sample_weight)?.accuracy())
}

/// Precision with the given averaging strategy
pub fn precision_score(
    y_true: &[f64],
    y_pred: &[f64],
    average: Average,
    sample_weight: Option<&[f64]>,
) -> Result<f64> {
    averaged(
        y_true,
        y_pred,
        average,
        sample_weight,
        |m, idx| m.precision[idx],
        MultiClassMetrics::precision_avg,
    )
}

/// Recall with the given averaging strategy
pub fn recall_score(
    y_true: &[f64],
    y_pred: &[f64],
    average: Average,
    sample_weight: Option<&[f64]>,
) -> Result<f64> {
    averaged(
        y_true,
        y_pred,
        average,
        sample_weight,
        |m, idx| m.recall[idx],
        MultiClassMetrics::recall_avg,
    )
}

/// F1 with the given averaging strategy
pub fn f1_score(
    y_true: &[f64],
    y_pred: &[f64],
    average: Average,
    sample_weight: Option<&[f64]>,
) -> Result<f64> {
    averaged(
        y_true,
        y_pred,
        average,
        sample_weight,
        |m, idx| m.f1[idx],
        MultiClassMetrics::f1_avg,
    )
}
