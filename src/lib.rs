//! Pay Classifier
//!
//! This crate combines base pay, overtime pay and a bonus into a weighted
//! total and maps that total onto a fixed salary band.

#![warn(missing_docs)]

pub mod calculation;
pub mod console;
pub mod error;
pub mod models;
