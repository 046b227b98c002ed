//! Calculation logic for the Pay Classifier.
//!
//! This module contains the weighted total pay calculation, the salary band
//! thresholds, and the classification that chains the two.

mod classifier;
mod salary_band;
mod weighted_total;

pub use classifier::{classify, classify_label};
pub use salary_band::{HIGH_THRESHOLD, LOW_THRESHOLD, MEDIUM_THRESHOLD, classify_total_pay};
pub use weighted_total::{
    BASE_PAY_WEIGHT, BONUS_WEIGHT, OVERTIME_WEIGHT, calculate_total_pay, weighted_sum,
};
