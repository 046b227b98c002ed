//! The record produced by classifying one set of pay inputs.

use serde::{Deserialize, Serialize};

use super::{PayInputs, PayLabel};

/// The outcome of a classification, including the intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The inputs that were classified.
    pub inputs: PayInputs,
    /// The weighted sum before truncation.
    pub weighted_sum: f64,
    /// The weighted sum truncated toward zero.
    pub total_pay: i32,
    /// The salary band for `total_pay`.
    pub label: PayLabel,
    /// One-line explanation of how the label was reached.
    pub reasoning: String,
}
