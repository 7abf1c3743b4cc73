//! Arithmetic progression detection and next-term prediction
//!
//! [`SequencePredictor`] is the only stateful piece of the crate. Every
//! adapter (console menu, one-shot CLI, HTTP handlers) holds one instance and
//! calls straight into it.
//!
//! # Example
//!
//! ```
//! use progression::SequencePredictor;
//!
//! let mut predictor = SequencePredictor::new();
//! let prediction = predictor.predict(&[3.0, 6.0, 9.0, 12.0]);
//! assert_eq!(prediction.next_number, Some(15.0));
//! assert_eq!(predictor.memories().len(), 1);
//! ```

mod history;

pub use history::History;

use serde_json::Value;
use tracing::debug;

use crate::error::SequenceError;
use crate::input::sequence_from_value;
use crate::models::{Memory, Prediction, ValidationResult};

/// Find the common difference of `sequence`.
///
/// Differences are compared exactly unless `tolerance` is positive, in which
/// case two differences match when they are within `tolerance` of each other.
pub fn common_difference(sequence: &[f64], tolerance: f64) -> Result<f64, SequenceError> {
    if sequence.len() < 2 {
        return Err(SequenceError::TooShort {
            len: sequence.len(),
        });
    }
    if let Some((i, value)) = sequence.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SequenceError::NonNumeric {
            position: i + 1,
            value: value.to_string(),
        });
    }

    let step = |i: usize| -> Result<f64, SequenceError> {
        let d = sequence[i] - sequence[i - 1];
        if d.is_finite() {
            Ok(d)
        } else {
            Err(SequenceError::Overflow {
                operation: format!("{} - {}", sequence[i], sequence[i - 1]),
            })
        }
    };

    let expected = step(1)?;
    for i in 2..sequence.len() {
        let found = step(i)?;
        if found != expected && (found - expected).abs() > tolerance {
            return Err(SequenceError::NotArithmetic {
                position: i + 1,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}

/// Validates sequences, predicts next terms, and remembers what it predicted
#[derive(Debug, Default)]
pub struct SequencePredictor {
    history: History,
    tolerance: f64,
}

impl SequencePredictor {
    /// Predictor with exact difference comparison
    pub fn new() -> Self {
        Self::default()
    }

    /// Predictor that accepts differences within `tolerance` of each other.
    /// Negative or non-finite values fall back to exact comparison.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            history: History::new(),
            tolerance: if tolerance.is_finite() && tolerance > 0.0 {
                tolerance
            } else {
                0.0
            },
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Check whether `sequence` is an arithmetic progression. Never touches history.
    pub fn validate(&self, sequence: &[f64]) -> ValidationResult {
        match common_difference(sequence, self.tolerance) {
            Ok(d) => ValidationResult::valid(d),
            Err(e) => ValidationResult::invalid(&e),
        }
    }

    /// Same as [`validate`](Self::validate) for untyped JSON input
    pub fn validate_value(&self, value: &Value) -> ValidationResult {
        match sequence_from_value(value) {
            Ok(sequence) => self.validate(&sequence),
            Err(e) => ValidationResult::invalid(&e),
        }
    }

    /// Predict the term after `sequence` and record it on success
    pub fn predict(&mut self, sequence: &[f64]) -> Prediction {
        match self.try_predict(sequence) {
            Ok(memory) => Prediction::success(memory.next_number, memory.common_difference),
            Err(e) => {
                debug!(reason = e.kind(), "prediction rejected: {}", e);
                Prediction::failure(&e)
            }
        }
    }

    /// Same as [`predict`](Self::predict) for untyped JSON input
    pub fn predict_value(&mut self, value: &Value) -> Prediction {
        match sequence_from_value(value) {
            Ok(sequence) => self.predict(&sequence),
            Err(e) => Prediction::failure(&e),
        }
    }

    fn try_predict(&mut self, sequence: &[f64]) -> Result<&Memory, SequenceError> {
        let difference = common_difference(sequence, self.tolerance)?;
        // common_difference guarantees at least two elements
        let last = sequence[sequence.len() - 1];
        let next = last + difference;
        if !next.is_finite() {
            return Err(SequenceError::Overflow {
                operation: format!("{} + {}", last, difference),
            });
        }
        let memory = self.history.record(sequence, next, difference);
        debug!(index = memory.index, next, difference, "prediction recorded");
        Ok(memory)
    }

    /// All memories, oldest first. Empty when nothing has been predicted.
    pub fn memories(&self) -> &[Memory] {
        self.history.entries()
    }

    /// Number of predictions recorded since creation or the last clear
    pub fn count(&self) -> u64 {
        self.history.count()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
