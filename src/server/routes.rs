//! API route handlers
//!
//! Each handler extracts its input, takes the predictor lock for exactly one
//! core call, and serializes the structured result.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::error::ApiError;
use super::page;
use super::AppState;
use crate::input::DEMO_SEQUENCE;
use crate::models::{Memory, Prediction, ValidationResult};
use crate::selftest;

#[derive(Debug, Serialize)]
pub struct MemoriesResponse {
    pub memories: Vec<Memory>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SelfTestResponse {
    pub success: bool,
    pub result: Prediction,
    pub message: String,
}

/// Pull the raw `sequence` field out of a request body.
///
/// The value is handed to the core untouched so that a non-array is reported
/// as a structured validation failure rather than a 400.
fn sequence_field(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(mut body) = body.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    match body.get_mut("sequence").map(Value::take) {
        Some(Value::Null) | None => Err(ApiError::BadRequest(
            "Missing 'sequence' in request body".to_string(),
        )),
        Some(sequence) => Ok(sequence),
    }
}

pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Prediction>, ApiError> {
    let sequence = sequence_field(body)?;
    let prediction = state.lock()?.predict_value(&sequence);
    Ok(Json(prediction))
}

pub async fn validate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let sequence = sequence_field(body)?;
    let result = state.lock()?.validate_value(&sequence);
    Ok(Json(result))
}

pub async fn list_memories(
    State(state): State<AppState>,
) -> Result<Json<MemoriesResponse>, ApiError> {
    let memories = state.lock()?.memories().to_vec();
    Ok(Json(MemoriesResponse {
        count: memories.len(),
        memories,
    }))
}

pub async fn clear_memories(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, ApiError> {
    let cleared = {
        let mut predictor = state.lock()?;
        let n = predictor.memories().len();
        predictor.clear();
        n
    };
    info!(cleared, "memories cleared");
    Ok(Json(ClearResponse {
        success: true,
        message: format!("Cleared {} memories", cleared),
    }))
}

/// Predict the demo sequence on the shared predictor
pub async fn self_test(State(state): State<AppState>) -> Result<Json<SelfTestResponse>, ApiError> {
    let result = state.lock()?.predict(&DEMO_SEQUENCE);
    let success = result.success && result.next_number == Some(15.0);
    let message = if success {
        "Self-test passed: 3, 6, 9, 12 -> 15".to_string()
    } else {
        format!("Self-test failed: {}", result.message)
    };
    Ok(Json(SelfTestResponse {
        success,
        result,
        message,
    }))
}

/// Liveness plus the built-in self tests, run on a scratch predictor
pub async fn health() -> Json<Value> {
    let report = selftest::run();
    Json(json!({
        "status": if report.all_passed() { "ok" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "selfTests": {
            "passed": report.passed,
            "total": report.total,
        }
    }))
}

pub async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
