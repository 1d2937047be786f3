//! Score- and probability-based metrics

use super::prediction::Prediction;
use super::validate::{check_consistent_length, to_labels, unique_labels, weighted_mean, weights_or_ones};
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// Weighted area under the ROC curve for a boolean target.
///
/// Tied scores are handled as one threshold (trapezoidal rule).
fn binary_auc(is_positive: &[bool], scores: &[f64], weights: &[f64]) -> Result<f64> {
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(Error::Scoring("y_score contains NaN or infinity".into()));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let (mut tp, mut fp) = (0.0, 0.0);
    let (mut prev_tp, mut prev_fp) = (0.0, 0.0);
    let mut area = 0.0;

    for (pos, &i) in order.iter().enumerate() {
        if is_positive[i] {
            tp += weights[i];
        } else {
            fp += weights[i];
        }
        let threshold_ends = order.get(pos + 1).map_or(true, |&next| scores[next] != scores[i]);
        if threshold_ends {
            area += (fp - prev_fp) * (tp + prev_tp) / 2.0;
            prev_tp = tp;
            prev_fp = fp;
        }
    }

    if tp == 0.0 || fp == 0.0 {
        return Err(Error::Scoring(
            "Only one class present in y_true. ROC AUC score is not defined in that case.".into(),
        ));
    }
    Ok(area / (tp * fp))
}

/// ROC AUC for a binary target; the larger label is the positive class.
pub fn roc_auc_score(y_true: &[f64], y_score: &[f64], sample_weight: Option<&[f64]>) -> Result<f64> {
    check_consistent_length(y_true.len(), y_score.len(), sample_weight)?;
    let labels = to_labels(y_true, "y_true")?;
    let classes = unique_labels(&labels);
    match classes.len() {
        1 => {
            return Err(Error::Scoring(
                "Only one class present in y_true. ROC AUC score is not defined in that case."
                    .into(),
            ))
        }
        2 => {}
        n => {
            return Err(Error::Scoring(format!(
                "y_true has {n} classes; binary ROC AUC needs 2, use roc_auc_ovr for multiclass"
            )))
        }
    }

    let positive = classes[1];
    let is_positive: Vec<bool> = labels.iter().map(|&l| l == positive).collect();
    let weights = weights_or_ones(sample_weight, y_true.len());
    binary_auc(&is_positive, y_score, &weights)
}

/// Map each class of `y_true` to its probability column.
///
/// When `y_true` holds as many labels as there are columns, columns follow
/// the sorted labels. A wider matrix means some classes are absent from
/// `y_true` (a cross-validation fold, say); column `k` then holds label `k`
/// and every label must lie in `0..ncols`.
fn class_columns(classes: &[i64], ncols: usize) -> Result<Vec<usize>> {
    if classes.len() == ncols {
        return Ok((0..ncols).collect());
    }
    let in_range = |&c: &i64| usize::try_from(c).ok().filter(|&k| k < ncols);
    match classes.iter().map(in_range).collect::<Option<Vec<usize>>>() {
        Some(columns) if classes.len() < ncols => Ok(columns),
        _ => Err(Error::Scoring(format!(
            "y_true and y_pred contain different number of classes {}, {}; \
             a wider probability matrix needs labels in 0..{ncols}",
            classes.len(),
            ncols
        ))),
    }
}

/// Macro-averaged one-vs-rest ROC AUC over a probability matrix.
///
/// Columns map to labels as in [`log_loss`]. The average runs over the
/// classes present in `y_true`, of which there must be at least two.
pub fn roc_auc_ovr_score(
    y_true: &[f64],
    y_proba: ArrayView2<'_, f64>,
    sample_weight: Option<&[f64]>,
) -> Result<f64> {
    check_consistent_length(y_true.len(), y_proba.nrows(), sample_weight)?;
    let labels = to_labels(y_true, "y_true")?;
    let classes = unique_labels(&labels);
    let columns = class_columns(&classes, y_proba.ncols())?;
    if classes.len() < 2 {
        return Err(Error::Scoring(
            "Only one class present in y_true. ROC AUC score is not defined in that case.".into(),
        ));
    }

    let weights = weights_or_ones(sample_weight, y_true.len());
    let mut total = 0.0;
    for (&class, &k) in classes.iter().zip(&columns) {
        let is_positive: Vec<bool> = labels.iter().map(|&l| l == class).collect();
        let column = y_proba.column(k).to_vec();
        total += binary_auc(&is_positive, &column, &weights)?;
    }
    Ok(total / classes.len() as f64)
}

/// Cross-entropy loss of predicted probabilities.
///
/// Accepts either the positive-class probability of a binary problem, which
/// needs both classes present in `y_true`, or a full probability matrix.
/// Matrix columns follow the sorted labels of `y_true` when the counts
/// match; a matrix wider than the label set is indexed by label, so column
/// `k` holds class `k`. Probabilities are clipped to `[ε, 1-ε]` and rows
/// renormalized.
pub fn log_loss(y_true: &[f64], y_pred: &Prediction, sample_weight: Option<&[f64]>) -> Result<f64> {
    check_consistent_length(y_true.len(), y_pred.len(), sample_weight)?;
    let labels = to_labels(y_true, "y_true")?;
    let classes = unique_labels(&labels);

    let proba: Array2<f64> = match y_pred {
        Prediction::Values(p) => {
            if classes.len() != 2 {
                return Err(Error::Scoring(format!(
                    "y_true has {} classes but y_pred holds a single probability per sample; \
                     binary log loss needs exactly two",
                    classes.len()
                )));
            }
            Array2::from_shape_fn((p.len(), 2), |(i, j)| if j == 1 { p[i] } else { 1.0 - p[i] })
        }
        Prediction::Probabilities(p) => p.clone(),
    };

    if proba.ncols() < 2 {
        return Err(Error::Scoring(format!(
            "y_pred has {} probability column(s). Log loss needs at least two classes",
            proba.ncols()
        )));
    }
    let columns = class_columns(&classes, proba.ncols())?;

    let eps = f64::EPSILON;
    let losses = labels.iter().enumerate().map(|(i, label)| {
        let row = proba.row(i);
        let row_sum: f64 = row.iter().map(|p| p.clamp(eps, 1.0 - eps)).sum();
        // classes is sorted and contains every label
        let k = classes.binary_search(label).map_or(0, |c| columns[c]);
        let p = row[k].clamp(eps, 1.0 - eps) / row_sum;
        -p.ln()
    });

    let weights = weights_or_ones(sample_weight, y_true.len());
    weighted_mean(losses, &weights)
}
