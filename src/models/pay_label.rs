//! Salary band labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The salary band a total pay falls into, from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PayLabel {
    /// Total pay of at least 9000.
    High,
    /// Total pay of at least 8000.
    Medium,
    /// Total pay of at least 7000.
    Low,
    /// Everything below 7000, including zero and negative totals.
    Entry,
}

impl PayLabel {
    /// Returns the label as printed on the salary line.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_classifier::models::PayLabel;
    ///
    /// assert_eq!(PayLabel::Medium.as_str(), "Medium");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PayLabel::High => "High",
            PayLabel::Medium => "Medium",
            PayLabel::Low => "Low",
            PayLabel::Entry => "Entry",
        }
    }
}

impl fmt::Display for PayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
