//! progression - arithmetic sequence prediction
//!
//! Validates candidate sequences, predicts the next term of an arithmetic
//! progression, and keeps an in-memory history of successful predictions.
//! The same [`SequencePredictor`] backs the interactive menu, the one-shot
//! CLI commands and the HTTP API.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod predictor;
pub mod selftest;
pub mod server;

pub use error::SequenceError;
pub use models::{Memory, Prediction, ValidationResult};
pub use predictor::{common_difference, SequencePredictor};
