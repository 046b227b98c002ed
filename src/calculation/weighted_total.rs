//! Weighted total pay calculation.
//!
//! Each input is scaled by a fixed weight in double precision, the three
//! products are summed left to right, and the sum is truncated toward zero.

use crate::models::PayInputs;

/// Weight applied to base pay.
pub const BASE_PAY_WEIGHT: f64 = 0.3;

/// Weight applied to overtime pay.
pub const OVERTIME_WEIGHT: f64 = 0.3;

/// Weight applied to the bonus amount.
pub const BONUS_WEIGHT: f64 = 0.4;

/// Returns the weighted sum of the inputs before truncation.
///
/// # Examples
///
/// ```
/// use pay_classifier::calculation::weighted_sum;
/// use pay_classifier::models::PayInputs;
///
/// let sum = weighted_sum(&PayInputs::new(1, 0, 22499));
/// assert!(sum > 8999.0 && sum < 9000.0);
/// ```
pub fn weighted_sum(inputs: &PayInputs) -> f64 {
    (f64::from(inputs.base_pay) * BASE_PAY_WEIGHT)
        + (f64::from(inputs.overtime) * OVERTIME_WEIGHT)
        + (f64::from(inputs.bonus) * BONUS_WEIGHT)
}

/// Calculates the total pay: the weighted sum truncated toward zero.
///
/// The fractional part is discarded, never rounded, so a sum of `8999.9`
/// yields `8999` and a sum of `-0.3` yields `0`. Sums outside the `i32`
/// range saturate at its bounds.
///
/// # Examples
///
/// ```
/// use pay_classifier::calculation::calculate_total_pay;
/// use pay_classifier::models::PayInputs;
///
/// assert_eq!(calculate_total_pay(&PayInputs::new(10000, 10000, 10000)), 10000);
/// assert_eq!(calculate_total_pay(&PayInputs::new(1, 0, 22499)), 8999);
/// ```
pub fn calculate_total_pay(inputs: &PayInputs) -> i32 {
    // `as` truncates toward zero and saturates.
    weighted_sum(inputs) as i32
}
