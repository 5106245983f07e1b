//! Axum route handlers for the Recommendation API.
//!
//! Every request carries its own catalogs and curated records; the data
//! access layer that fetched them lives with the caller.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diagnosis::radar::DiagnosisScores;
use crate::diagnosis::values::public_value_cards;
use crate::errors::AppError;
use crate::models::opportunity::{Company, Opportunity};
use crate::models::recommendation::RecommendationRecord;
use crate::recommendation::affinity::{rank_jobs_by_affinity, ScoredJob};
use crate::recommendation::curation::{plan_curation, CurationCandidate};
use crate::recommendation::selector::{get_recommendations, RecommendationOutcome};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub user_value_ids: Vec<u32>,
    #[serde(default)]
    pub jobs: Vec<Opportunity>,
    #[serde(default)]
    pub courses: Vec<Opportunity>,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub curated: Vec<RecommendationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CurationPlanRequest {
    pub selected_value_ids: Vec<u32>,
    pub courses: Vec<Opportunity>,
    #[serde(default)]
    pub existing: Vec<RecommendationRecord>,
}

#[derive(Debug, Serialize)]
pub struct CurationPlanResponse {
    pub candidates: Vec<CurationCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct AffinityRequest {
    pub jobs: Vec<Opportunity>,
    #[serde(default)]
    pub public_value_ids: Vec<u32>,
    #[serde(default)]
    pub scores: DiagnosisScores,
}

#[derive(Debug, Serialize)]
pub struct AffinityResponse {
    pub jobs: Vec<ScoredJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Returns the display lists plus the per-value records behind them.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationOutcome>, AppError> {
    let Json(request) = payload?;

    let outcome = get_recommendations(
        &request.user_value_ids,
        &request.jobs,
        &request.courses,
        &request.companies,
        &request.curated,
        &state.catalog,
    );
    debug!(
        "Selected {} jobs and {} courses for {} values",
        outcome.result.jobs.len(),
        outcome.result.courses.len(),
        outcome.recommendations.values.len()
    );

    Ok(Json(outcome))
}

/// POST /api/v1/recommendations/plan
///
/// Value/course pairs awaiting reason messages from the generation step.
pub async fn handle_curation_plan(
    State(state): State<AppState>,
    payload: Result<Json<CurationPlanRequest>, JsonRejection>,
) -> Result<Json<CurationPlanResponse>, AppError> {
    let Json(request) = payload?;
    if request.courses.is_empty() {
        return Err(AppError::Validation(
            "courses cannot be empty when planning recommendations".to_string(),
        ));
    }

    let candidates = plan_curation(
        &request.selected_value_ids,
        &request.courses,
        &request.existing,
        &state.catalog,
    );

    Ok(Json(CurationPlanResponse { candidates }))
}

/// POST /api/v1/jobs/affinity
pub async fn handle_job_affinity(
    State(state): State<AppState>,
    payload: Result<Json<AffinityRequest>, JsonRejection>,
) -> Result<Json<AffinityResponse>, AppError> {
    let Json(request) = payload?;

    let value_names: Vec<String> = public_value_cards(&request.public_value_ids, &state.catalog)
        .into_iter()
        .map(|card| card.name.clone())
        .collect();
    let jobs = rank_jobs_by_affinity(&request.jobs, &value_names, &request.scores);

    Ok(Json(AffinityResponse { jobs }))
}
