//! End-to-end classification of one set of pay inputs.

use tracing::debug;

use super::salary_band::{classify_total_pay, describe_band};
use super::weighted_total::{
    BASE_PAY_WEIGHT, BONUS_WEIGHT, OVERTIME_WEIGHT, calculate_total_pay, weighted_sum,
};
use crate::models::{ClassificationResult, PayInputs, PayLabel};

/// Classifies pay inputs into a salary band.
///
/// Computes the weighted sum, truncates it to the total pay, and picks the
/// band. The result records every intermediate value along with a one-line
/// explanation. This function is pure: the same inputs always give the same
/// result.
///
/// # Examples
///
/// ```
/// use pay_classifier::calculation::classify;
/// use pay_classifier::models::{PayInputs, PayLabel};
///
/// let result = classify(&PayInputs::new(10000, 10000, 10000));
/// assert_eq!(result.total_pay, 10000);
/// assert_eq!(result.label, PayLabel::High);
/// ```
pub fn classify(inputs: &PayInputs) -> ClassificationResult {
    let weighted_sum = weighted_sum(inputs);
    let total_pay = calculate_total_pay(inputs);
    let label = classify_total_pay(total_pay);

    let reasoning = format!(
        "{} x {} + {} x {} + {} x {} = {} -> {}; {} -> {}",
        inputs.base_pay,
        BASE_PAY_WEIGHT,
        inputs.overtime,
        OVERTIME_WEIGHT,
        inputs.bonus,
        BONUS_WEIGHT,
        weighted_sum,
        total_pay,
        describe_band(total_pay),
        label
    );

    debug!(
        base_pay = inputs.base_pay,
        overtime = inputs.overtime,
        bonus = inputs.bonus,
        weighted_sum,
        total_pay,
        label = %label,
        "Classified pay inputs"
    );

    ClassificationResult {
        inputs: *inputs,
        weighted_sum,
        total_pay,
        label,
        reasoning,
    }
}

/// Returns only the salary band for the three pay figures.
///
/// # Examples
///
/// ```
/// use pay_classifier::calculation::classify_label;
/// use pay_classifier::models::PayLabel;
///
/// assert_eq!(classify_label(0, 0, 0), PayLabel::Entry);
/// ```
pub fn classify_label(base_pay: i32, overtime: i32, bonus: i32) -> PayLabel {
    classify(&PayInputs::new(base_pay, overtime, bonus)).label
}
