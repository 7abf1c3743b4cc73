//! Core data models for progression
//!
//! These are the structured results handed to every adapter. Field names
//! serialize in camelCase, which is what the HTTP API exposes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SequenceError;

/// Outcome of checking whether a sequence is an arithmetic progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub difference: Option<f64>,
    pub message: String,
}

impl ValidationResult {
    pub fn valid(difference: f64) -> Self {
        Self {
            is_valid: true,
            difference: Some(difference),
            message: format!(
                "Valid arithmetic sequence with common difference {}",
                difference
            ),
        }
    }

    pub fn invalid(error: &SequenceError) -> Self {
        Self {
            is_valid: false,
            difference: None,
            message: error.to_string(),
        }
    }
}

/// Outcome of a next-term prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub success: bool,
    pub next_number: Option<f64>,
    pub common_difference: Option<f64>,
    pub message: String,
}

impl Prediction {
    pub fn success(next_number: f64, common_difference: f64) -> Self {
        Self {
            success: true,
            next_number: Some(next_number),
            common_difference: Some(common_difference),
            message: format!(
                "Next number is {} (common difference {})",
                next_number, common_difference
            ),
        }
    }

    pub fn failure(error: &SequenceError) -> Self {
        Self {
            success: false,
            next_number: None,
            common_difference: None,
            message: error.to_string(),
        }
    }
}

/// A recorded successful prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub sequence: Vec<f64>,
    pub next_number: f64,
    pub common_difference: f64,
    pub timestamp: DateTime<Utc>,
    /// 1-based, dense for the lifetime of the owning predictor
    pub index: u64,
}

/// Render a sequence as `3, 6, 9, 12`
pub fn format_sequence(sequence: &[f64]) -> String {
    sequence
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_serializes_camel_case() {
        let json = serde_json::to_value(Prediction::success(15.0, 3.0)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["nextNumber"].as_f64(), Some(15.0));
        assert_eq!(json["commonDifference"].as_f64(), Some(3.0));
        assert!(json["message"].as_str().unwrap().contains("15"));
    }

    #[test]
    fn test_failure_has_null_fields() {
        let json = serde_json::to_value(Prediction::failure(&SequenceError::NotASequence)).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["nextNumber"].is_null());
        assert!(json["commonDifference"].is_null());
    }

    #[test]
    fn test_validation_result_field_names() {
        let json = serde_json::to_value(ValidationResult::valid(-3.0)).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["difference"].as_f64(), Some(-3.0));
    }

    #[test]
    fn test_format_sequence_drops_trailing_zero() {
        assert_eq!(format_sequence(&[3.0, 6.0, 9.5]), "3, 6, 9.5");
        assert_eq!(format_sequence(&[]), "");
    }
}
