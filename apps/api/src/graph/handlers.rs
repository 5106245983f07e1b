//! Axum route handler for the skill graph.

use std::collections::HashSet;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::graph::projector::{project_graph, SkillGraph};
use crate::models::opportunity::{Company, Opportunity};
use crate::models::recommendation::RecommendationRecord;
use crate::recommendation::selector::get_recommendations;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillGraphRequest {
    pub selected_value_ids: Vec<u32>,
    #[serde(default)]
    pub courses: Vec<Opportunity>,
    #[serde(default)]
    pub jobs: Vec<Opportunity>,
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub curated: Vec<RecommendationRecord>,
    #[serde(default)]
    pub completed_opportunity_ids: HashSet<String>,
}

/// POST /api/v1/skill-graph
///
/// Runs the selector, then lays out the positive values and their course
/// records. Shadow values never appear on the graph.
pub async fn handle_skill_graph(
    State(state): State<AppState>,
    payload: Result<Json<SkillGraphRequest>, JsonRejection>,
) -> Result<Json<SkillGraph>, AppError> {
    let Json(request) = payload?;

    let outcome = get_recommendations(
        &request.selected_value_ids,
        &request.jobs,
        &request.courses,
        &request.companies,
        &request.curated,
        &state.catalog,
    );
    let unlocked = state.catalog.positive_cards(&request.selected_value_ids);

    let graph = project_graph(
        &unlocked,
        &outcome.recommendations,
        &request.completed_opportunity_ids,
        &request.courses,
    );

    Ok(Json(graph))
}
