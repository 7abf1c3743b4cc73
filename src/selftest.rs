//! Built-in self tests
//!
//! A fixed table of sequences with known outcomes. Each run uses a scratch
//! predictor so the caller's history is left alone.

use serde::Serialize;

use crate::input::DEMO_SEQUENCE;
use crate::models::{format_sequence, Prediction};
use crate::predictor::SequencePredictor;

/// One known case: `expected` is the next term, or `None` when the sequence must be rejected
#[derive(Debug, Clone, Copy)]
pub struct SelfTestCase {
    pub name: &'static str,
    pub sequence: &'static [f64],
    pub expected: Option<f64>,
}

pub const CASES: &[SelfTestCase] = &[
    SelfTestCase {
        name: "increasing",
        sequence: &DEMO_SEQUENCE,
        expected: Some(15.0),
    },
    SelfTestCase {
        name: "decreasing",
        sequence: &[10.0, 7.0, 4.0, 1.0],
        expected: Some(-2.0),
    },
    SelfTestCase {
        name: "constant",
        sequence: &[7.0, 7.0, 7.0, 7.0],
        expected: Some(7.0),
    },
    SelfTestCase {
        name: "two terms",
        sequence: &[5.0, 10.0],
        expected: Some(15.0),
    },
    SelfTestCase {
        name: "fractional step",
        sequence: &[1.5, 2.0, 2.5],
        expected: Some(3.0),
    },
    SelfTestCase {
        name: "geometric",
        sequence: &[1.0, 2.0, 4.0, 8.0],
        expected: None,
    },
    SelfTestCase {
        name: "single term",
        sequence: &[42.0],
        expected: None,
    },
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOutcome {
    pub name: &'static str,
    pub sequence: String,
    pub passed: bool,
    pub prediction: Prediction,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfTestReport {
    pub outcomes: Vec<CaseOutcome>,
    pub passed: usize,
    pub total: usize,
}

impl SelfTestReport {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl SelfTestCase {
    fn check(&self, prediction: &Prediction) -> bool {
        match self.expected {
            Some(next) => prediction.success && prediction.next_number == Some(next),
            None => !prediction.success && prediction.next_number.is_none(),
        }
    }
}

/// Run every case in [`CASES`]
pub fn run() -> SelfTestReport {
    let mut predictor = SequencePredictor::new();
    let outcomes: Vec<CaseOutcome> = CASES
        .iter()
        .map(|case| {
            let prediction = predictor.predict(case.sequence);
            CaseOutcome {
                name: case.name,
                sequence: format_sequence(case.sequence),
                passed: case.check(&prediction),
                prediction,
            }
        })
        .collect();

    let passed = outcomes.iter().filter(|o| o.passed).count();
    SelfTestReport {
        total: outcomes.len(),
        passed,
        outcomes,
    }
}
