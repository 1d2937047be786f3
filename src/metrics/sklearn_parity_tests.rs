//! sklearn parity tests for the default registry
//!
//! Reference values computed with sklearn 1.4:
//! ```python
//! from sklearn.metrics import (accuracy_score, precision_score, recall_score,
//!                              f1_score, roc_auc_score, log_loss)
//! ```

use super::{MetricRegistry, Prediction};
use ndarray::array;

fn score(name: &str, y_true: &[f64], y_pred: Prediction) -> f64 {
    MetricRegistry::default()
        .get(name)
        .unwrap_or_else(|| panic!("{name} not registered"))
        .score(y_true, &y_pred, None)
        .unwrap()
}

fn assert_parity(name: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{name} = {actual} does not match sklearn reference {expected}"
    );
}

#[test]
fn test_sklearn_parity_balanced_multiclass() {
    // every class has P = R = F1 = 2/3
    let y_true = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 0.0, 1.0, 2.0];
    let y_pred = vec![0.0, 1.0, 1.0, 2.0, 2.0, 0.0, 0.0, 1.0, 2.0];

    for name in [
        "accuracy",
        "precision_macro",
        "recall_macro",
        "f1_macro",
        "precision_micro",
        "f1_micro",
        "f1_weighted",
    ] {
        assert_parity(name, score(name, &y_true, y_pred.clone().into()), 0.6666666666666666);
    }
}

#[test]
fn test_sklearn_parity_imbalanced() {
    // Class 0: TP=3, FP=1, FN=2 -> P=0.75, R=0.6, F1=0.6667
    // Class 1: TP=1, FP=2, FN=1 -> P=0.333, R=0.5, F1=0.4
    // Class 2: TP=1, FP=0, FN=0 -> P=1, R=1, F1=1
    let y_true = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0];
    let y_pred = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 2.0];

    assert_parity("accuracy", score("accuracy", &y_true, y_pred.clone().into()), 0.625);
    assert_parity("f1_macro", score("f1_macro", &y_true, y_pred.clone().into()), 0.6888888888888888);
    assert_parity("f1_weighted", score("f1_weighted", &y_true, y_pred.into()), 0.6416666666666666);
}

#[test]
fn test_sklearn_parity_binary() {
    // Class 1: TP=3, FP=2, FN=1 -> P=0.6, R=0.75, F1=0.6667
    let y_true = [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0];
    let y_pred = vec![0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

    assert_parity("precision", score("precision", &y_true, y_pred.clone().into()), 0.6);
    assert_parity("recall", score("recall", &y_true, y_pred.clone().into()), 0.75);
    assert_parity("f1", score("f1", &y_true, y_pred.clone().into()), 0.6666666666666666);
    assert_parity("f1_macro", score("f1_macro", &y_true, y_pred.into()), 0.6190476190476191);
}

#[test]
fn test_sklearn_parity_roc_auc() {
    // sklearn: roc_auc_score([0, 0, 1, 1], [0.1, 0.4, 0.35, 0.8]) = 0.75
    let auc = score("roc_auc", &[0.0, 0.0, 1.0, 1.0], vec![0.1, 0.4, 0.35, 0.8].into());
    assert_parity("roc_auc", auc, 0.75);
}

#[test]
fn test_sklearn_parity_log_loss() {
    // sklearn: log_loss(["spam", "ham", "ham", "spam"],
    //                   [[.1, .9], [.9, .1], [.8, .2], [.35, .65]]) = 0.21616187468057912
    let proba = array![[0.1, 0.9], [0.9, 0.1], [0.8, 0.2], [0.35, 0.65]];
    let loss = score("neg_log_loss", &[1.0, 0.0, 0.0, 1.0], Prediction::Probabilities(proba));
    assert_parity("neg_log_loss", loss, 0.21616187468057912);
}

#[test]
fn test_sklearn_parity_regression() {
    let y_true = [3.0, -0.5, 2.0, 7.0];
    let y_pred = vec![2.5, 0.0, 2.0, 8.0];

    assert_parity("neg_mean_squared_error", score("neg_mean_squared_error", &y_true, y_pred.clone().into()), 0.375);
    assert_parity("neg_mean_absolute_error", score("neg_mean_absolute_error", &y_true, y_pred.clone().into()), 0.5);
    assert_parity("r2", score("r2", &y_true, y_pred.into()), 0.9486081370449679);
}
