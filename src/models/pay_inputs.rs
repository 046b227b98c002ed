//! The three raw pay figures supplied for one classification.

use serde::{Deserialize, Serialize};

/// Base pay, overtime pay and bonus as entered by the user.
///
/// No range checks are applied: zero and negative amounts are valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayInputs {
    /// Base pay.
    pub base_pay: i32,
    /// Overtime pay.
    pub overtime: i32,
    /// Bonus amount.
    pub bonus: i32,
}

impl PayInputs {
    /// Creates a new set of pay inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_classifier::models::PayInputs;
    ///
    /// let inputs = PayInputs::new(10000, 10000, 10000);
    /// assert_eq!(inputs.bonus, 10000);
    /// ```
    pub fn new(base_pay: i32, overtime: i32, bonus: i32) -> Self {
        Self {
            base_pay,
            overtime,
            bonus,
        }
    }
}
