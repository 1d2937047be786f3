//! Averaging strategies for multi-class metrics

use serde::{Deserialize, Serialize};

/// Averaging strategy for precision, recall and F1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Average {
    /// Report the positive class (label 1) only
    Binary,
    /// Calculate metrics for each label, return unweighted mean
    Macro,
    /// Calculate metrics globally by counting total TP, FP, FN
    Micro,
    /// Weighted mean by support (number of true instances per label)
    Weighted,
}
