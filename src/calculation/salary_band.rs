//! Salary band thresholds.
//!
//! Thresholds are inclusive lower bounds checked from the highest band down;
//! the first band whose threshold the total reaches wins.

use crate::models::PayLabel;

/// Minimum total pay for the `High` band.
pub const HIGH_THRESHOLD: i32 = 9000;

/// Minimum total pay for the `Medium` band.
pub const MEDIUM_THRESHOLD: i32 = 8000;

/// Minimum total pay for the `Low` band.
pub const LOW_THRESHOLD: i32 = 7000;

/// Maps a total pay onto its salary band.
///
/// # Examples
///
/// ```
/// use pay_classifier::calculation::classify_total_pay;
/// use pay_classifier::models::PayLabel;
///
/// assert_eq!(classify_total_pay(9000), PayLabel::High);
/// assert_eq!(classify_total_pay(8999), PayLabel::Medium);
/// assert_eq!(classify_total_pay(-5), PayLabel::Entry);
/// ```
pub fn classify_total_pay(total_pay: i32) -> PayLabel {
    if total_pay >= HIGH_THRESHOLD {
        PayLabel::High
    } else if total_pay >= MEDIUM_THRESHOLD {
        PayLabel::Medium
    } else if total_pay >= LOW_THRESHOLD {
        PayLabel::Low
    } else {
        PayLabel::Entry
    }
}

/// Describes the threshold comparison that selected the band, e.g. `"8999 >= 8000"`.
pub(crate) fn describe_band(total_pay: i32) -> String {
    match classify_total_pay(total_pay) {
        PayLabel::High => format!("{} >= {}", total_pay, HIGH_THRESHOLD),
        PayLabel::Medium => format!("{} >= {}", total_pay, MEDIUM_THRESHOLD),
        PayLabel::Low => format!("{} >= {}", total_pay, LOW_THRESHOLD),
        PayLabel::Entry => format!("{} < {}", total_pay, LOW_THRESHOLD),
    }
}
