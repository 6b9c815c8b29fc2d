use crate::models::responses::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, response::Json};

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "catalog-service".to_string(),
        status: "ok".to_string(),
        books_loaded: state.catalog.len(),
        skipped_rows: state.report.skipped,
        loaded_at: state.loaded_at.to_rfc3339(),
    })
}
