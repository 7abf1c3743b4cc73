//! Error taxonomy for sequence validation and prediction
//!
//! None of these are fatal. The predictor renders them into the `message`
//! field of a [`ValidationResult`](crate::models::ValidationResult) or
//! [`Prediction`](crate::models::Prediction) instead of returning them.

use thiserror::Error;

/// Why a candidate sequence could not be used for prediction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    #[error("Input must be a list of numbers")]
    NotASequence,

    #[error("Sequence must contain at least 2 numbers (got {len})")]
    TooShort { len: usize },

    /// `position` is 1-based, as shown to users
    #[error("Element {position} is not a valid number: {value}")]
    NonNumeric { position: usize, value: String },

    /// `position` is the 1-based index of the element that broke the pattern
    #[error(
        "Not an arithmetic sequence: difference at element {position} is {found}, expected {expected}"
    )]
    NotArithmetic {
        position: usize,
        expected: f64,
        found: f64,
    },

    #[error("Arithmetic overflow: {operation} is not a finite number")]
    Overflow { operation: String },
}

impl SequenceError {
    /// Short machine-friendly name of the error class
    pub fn kind(&self) -> &'static str {
        match self {
            SequenceError::NotASequence => "type",
            SequenceError::TooShort { .. } => "length",
            SequenceError::NonNumeric { .. } => "numeric",
            SequenceError::NotArithmetic { .. } => "progression",
            SequenceError::Overflow { .. } => "overflow",
        }
    }
}
