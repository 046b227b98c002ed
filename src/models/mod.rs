//! Core data models for the Pay Classifier.
//!
//! This module contains the value types passed between the console layer
//! and the calculation functions.

mod classification_result;
mod pay_inputs;
mod pay_label;

pub use classification_result::ClassificationResult;
pub use pay_inputs::PayInputs;
pub use pay_label::PayLabel;
