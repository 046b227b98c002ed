//! Error types for the Pay Classifier.
//!
//! The classification itself cannot fail. Errors only come from the console
//! layer: unreadable tokens, input that ends early, or a broken stream.

use thiserror::Error;

/// The main error type for the Pay Classifier.
///
/// # Example
///
/// ```
/// use pay_classifier::error::ClassifierError;
///
/// let error = ClassifierError::MissingInput {
///     field: "bonus amount".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing input for bonus amount");
/// ```
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A token could not be read as a whole number.
    #[error("Invalid {field} '{value}': {message}")]
    InvalidInput {
        /// The input being read (e.g. "base pay").
        field: String,
        /// The raw token as typed.
        value: String,
        /// A description of why the token was rejected.
        message: String,
    },

    /// Standard input ended before every value was read.
    #[error("Missing input for {field}")]
    MissingInput {
        /// The input that was still expected.
        field: String,
    },

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return ClassifierError.
pub type ClassifierResult<T> = Result<T, ClassifierError>;
