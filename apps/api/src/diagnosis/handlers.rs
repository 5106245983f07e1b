//! Axum route handlers for the diagnosis and value-card API.

use std::collections::HashMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::catalog::ValueCatalog;
use crate::diagnosis::radar::{
    aggregate_answers, compute_radar_data, CategoryRadarPoint, DiagnosisScores,
};
use crate::diagnosis::values::{
    derive_selected_values, restore_selected_values, toggle_public_value,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RadarRequest {
    #[serde(default)]
    pub scores: DiagnosisScores,
}

#[derive(Debug, Serialize)]
pub struct RadarResponse {
    pub points: Vec<CategoryRadarPoint>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Question id → answer on the 1–5 scale.
    pub answers: HashMap<u32, f64>,
    /// Previously stored selection; repaired instead of re-derived when given.
    #[serde(default)]
    pub stored_values: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub scores: DiagnosisScores,
    pub radar: Vec<CategoryRadarPoint>,
    pub selected_values: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TogglePublicRequest {
    #[serde(default)]
    pub public_values: Vec<u32>,
    pub value_id: u32,
}

#[derive(Debug, Serialize)]
pub struct TogglePublicResponse {
    pub public_values: Vec<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/values
pub async fn handle_list_values(State(state): State<AppState>) -> Json<ValueCatalog> {
    Json(state.catalog.as_ref().clone())
}

/// POST /api/v1/diagnosis/radar
///
/// Always answers with one point per category, even for an empty map.
pub async fn handle_radar(
    payload: Result<Json<RadarRequest>, JsonRejection>,
) -> Result<Json<RadarResponse>, AppError> {
    let Json(request) = payload?;
    Ok(Json(RadarResponse {
        points: compute_radar_data(&request.scores),
    }))
}

/// POST /api/v1/diagnosis/evaluate
///
/// Full pass over a finished diagnosis: category scores, radar points and
/// the unlocked value pairs.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let Json(request) = payload?;
    if request.answers.is_empty() {
        return Err(AppError::Validation("answers cannot be empty".to_string()));
    }

    let scores = aggregate_answers(&request.answers, &state.catalog);
    let radar = compute_radar_data(&scores);
    let selected_values = if request.stored_values.is_empty() {
        derive_selected_values(&request.answers, &state.catalog)
    } else {
        restore_selected_values(&request.stored_values, &request.answers, &state.catalog)
    };

    Ok(Json(EvaluateResponse {
        scores,
        radar,
        selected_values,
    }))
}

/// POST /api/v1/values/public
pub async fn handle_toggle_public(
    State(state): State<AppState>,
    payload: Result<Json<TogglePublicRequest>, JsonRejection>,
) -> Result<Json<TogglePublicResponse>, AppError> {
    let Json(request) = payload?;
    let public_values =
        toggle_public_value(&request.public_values, request.value_id, &state.catalog)?;
    Ok(Json(TogglePublicResponse { public_values }))
}
