use crate::models::responses::{CategoryStats, OverviewStats};
use crate::services::stats;
use crate::state::AppState;
use axum::{extract::State, response::Json};
use std::collections::BTreeMap;

pub async fn stats_overview(State(state): State<AppState>) -> Json<OverviewStats> {
    Json(stats::overview(&state.catalog))
}

pub async fn stats_by_category(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, CategoryStats>> {
    Json(stats::by_category(&state.catalog))
}
