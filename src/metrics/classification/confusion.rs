//! Weighted confusion matrix

use crate::error::{Error, Result};
use std::fmt;

/// Confusion matrix over the labels observed in targets and predictions
///
/// Element [i][j] is the total sample weight with true label `labels[i]`
/// predicted as `labels[j]`.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    /// matrix[true_index][predicted_index] = weighted count
    matrix: Vec<Vec<f64>>,
    /// Sorted class labels; row/column `i` belongs to `labels[i]`
    labels: Vec<i64>,
}

impl ConfusionMatrix {
    /// Create an empty confusion matrix over the given sorted labels
    pub fn new(labels: Vec<i64>) -> Self {
        let n = labels.len();
        Self {
            matrix: vec![vec![0.0; n]; n],
            labels,
        }
    }

    /// Create from predictions and ground truth
    ///
    /// Unweighted samples count as 1.0. Fails when predictions, targets and
    /// weights disagree in length.
    pub fn from_predictions(
        y_pred: &[i64],
        y_true: &[i64],
        sample_weight: Option<&[f64]>,
    ) -> Result<Self> {
        if y_pred.len() != y_true.len() {
            return Err(Error::Scoring(format!(
                "Predictions and targets must have same length: [{}, {}]",
                y_true.len(),
                y_pred.len()
            )));
        }
        if let Some(w) = sample_weight {
            if w.len() != y_true.len() {
                return Err(Error::Scoring(format!(
                    "sample_weight has {} entries, expected {}",
                    w.len(),
                    y_true.len()
                )));
            }
        }

        let mut labels: Vec<i64> = y_true.iter().chain(y_pred.iter()).copied().collect();
        labels.sort_unstable();
        labels.dedup();

        let mut cm = Self::new(labels);
        for (i, (&pred, &true_label)) in y_pred.iter().zip(y_true.iter()).enumerate() {
            let weight = sample_weight.map_or(1.0, |w| w[i]);
            if let (Some(t), Some(p)) = (cm.index_of(true_label), cm.index_of(pred)) {
                cm.matrix[t][p] += weight;
            }
        }
        Ok(cm)
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// Get the class labels
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Row/column index of a label
    pub fn index_of(&self, label: i64) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }

    /// Get element at [true_index][predicted_index]
    pub fn get(&self, true_index: usize, predicted_index: usize) -> f64 {
        self.matrix[true_index][predicted_index]
    }

    /// Calculate true positives for a class index
    pub fn true_positives(&self, class: usize) -> f64 {
        self.matrix[class][class]
    }

    /// Calculate false positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> f64 {
        (0..self.n_classes()).filter(|&i| i != class).map(|i| self.matrix[i][class]).sum()
    }

    /// Calculate false negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> f64 {
        (0..self.n_classes()).filter(|&j| j != class).map(|j| self.matrix[class][j]).sum()
    }

    /// Calculate support (total true weight) for a class
    pub fn support(&self, class: usize) -> f64 {
        self.matrix[class].iter().sum()
    }

    /// Total sample weight
    pub fn total(&self) -> f64 {
        self.matrix.iter().flatten().sum()
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        let correct: f64 = (0..self.n_classes()).map(|i| self.matrix[i][i]).sum();
        correct / total
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "        ")?;
        for label in &self.labels {
            write!(f, "{:>8}", format!("Pred {label}"))?;
        }
        writeln!(f)?;

        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "{:<8}", format!("True {label}"))?;
            for j in 0..self.n_classes() {
                write!(f, "{:>8}", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
