//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;

/// Per-class precision, recall and F1 with their supports
#[derive(Clone, Debug)]
pub struct MultiClassMetrics {
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (weighted count of true instances)
    pub support: Vec<f64>,
    /// Number of classes
    pub n_classes: usize,
    tp_total: f64,
    fp_total: f64,
    fn_total: f64,
}

/// Ratio that yields 0.0 on zero division
fn safe_ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

fn harmonic(p: f64, r: f64) -> f64 {
    if p + r > 0.0 {
        2.0 * p * r / (p + r)
    } else {
        0.0
    }
}

impl MultiClassMetrics {
    /// Compute metrics from confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);
        let (mut tp_total, mut fp_total, mut fn_total) = (0.0, 0.0, 0.0);

        for class in 0..n_classes {
            let tp = cm.true_positives(class);
            let fp = cm.false_positives(class);
            let fn_ = cm.false_negatives(class);

            let p = safe_ratio(tp, tp + fp);
            let r = safe_ratio(tp, tp + fn_);

            precision.push(p);
            recall.push(r);
            f1.push(harmonic(p, r));
            support.push(cm.support(class));

            tp_total += tp;
            fp_total += fp;
            fn_total += fn_;
        }

        Self {
            precision,
            recall,
            f1,
            support,
            n_classes,
            tp_total,
            fp_total,
            fn_total,
        }
    }

    /// Get averaged precision
    ///
    /// `Average::Binary` has no meaning without a positive label and is
    /// treated as macro here; binary scores go through [`precision_score`].
    ///
    /// [`precision_score`]: super::precision_score
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => safe_ratio(self.tp_total, self.tp_total + self.fp_total),
            _ => self.average_metric(&self.precision, average),
        }
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => safe_ratio(self.tp_total, self.tp_total + self.fn_total),
            _ => self.average_metric(&self.recall, average),
        }
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => harmonic(
                self.precision_avg(Average::Micro),
                self.recall_avg(Average::Micro),
            ),
            _ => self.average_metric(&self.f1, average),
        }
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Weighted => {
                let total_support: f64 = self.support.iter().sum();
                if total_support == 0.0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s)
                    .sum::<f64>()
                    / total_support
            }
            Average::Macro | Average::Micro | Average::Binary => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
        }
    }
}
