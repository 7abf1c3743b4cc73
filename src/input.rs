//! Turning untyped input into sequences
//!
//! Console lines and JSON request bodies both end up as `Vec<f64>`. Anything
//! that cannot be converted is reported as a [`SequenceError`] so the caller
//! can produce a structured failure.

use serde_json::Value;

use crate::error::SequenceError;

/// Sequence used by the `demo` shortcut and the HTTP self-test
pub const DEMO_SEQUENCE: [f64; 4] = [3.0, 6.0, 9.0, 12.0];

/// Parse one console line: `demo`, or comma-separated numbers
pub fn parse_line(line: &str) -> Result<Vec<f64>, SequenceError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SequenceError::NotASequence);
    }
    if line.eq_ignore_ascii_case("demo") {
        return Ok(DEMO_SEQUENCE.to_vec());
    }

    line.split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| SequenceError::NonNumeric {
                    position: i + 1,
                    value: if token.is_empty() {
                        "(empty)".to_string()
                    } else {
                        token.to_string()
                    },
                })
        })
        .collect()
}

/// Convert a JSON value into a sequence.
///
/// Type is checked first, then length, then each element, matching the
/// order the predictor uses for typed input.
pub fn sequence_from_value(value: &Value) -> Result<Vec<f64>, SequenceError> {
    let items = value.as_array().ok_or(SequenceError::NotASequence)?;
    if items.len() < 2 {
        return Err(SequenceError::TooShort { len: items.len() });
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_f64().ok_or_else(|| SequenceError::NonNumeric {
                position: i + 1,
                value: item.to_string(),
            })
        })
        .collect()
}
