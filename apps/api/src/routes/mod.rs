pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::diagnosis::handlers as diagnosis;
use crate::graph::handlers as graph;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Values & diagnosis
        .route("/api/v1/values", get(diagnosis::handle_list_values))
        .route("/api/v1/values/public", post(diagnosis::handle_toggle_public))
        .route("/api/v1/diagnosis/radar", post(diagnosis::handle_radar))
        .route("/api/v1/diagnosis/evaluate", post(diagnosis::handle_evaluate))
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommendations),
        )
        .route(
            "/api/v1/recommendations/plan",
            post(recommendation::handle_curation_plan),
        )
        .route("/api/v1/jobs/affinity", post(recommendation::handle_job_affinity))
        // Skill graph
        .route("/api/v1/skill-graph", post(graph::handle_skill_graph))
        .with_state(state)
}
