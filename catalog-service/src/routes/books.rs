use crate::error::ApiError;
use crate::models::book::Book;
use crate::models::responses::BookPage;
use crate::services::query::{run_query, BookQuery, QueryError, SearchParams};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use std::num::IntErrorKind;
use tracing::{debug, info};

pub async fn list_books(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<BookPage>, ApiError> {
    let Query(params) = params.map_err(|e| QueryError::Malformed(e.body_text()))?;
    info!("Book query: {:?}", params);

    let query = BookQuery::try_from(params)?;
    let page = run_query(&state.catalog, &query);

    debug!(
        "Query matched {} books, returning page {} ({} items)",
        page.total_matches,
        page.page,
        page.items.len()
    );

    Ok(Json(page.into()))
}

/// Ids are `u32`; a well-formed number past that range simply has no book.
fn parse_book_id(raw: &str) -> Result<u32, ApiError> {
    match raw.parse::<u32>() {
        Ok(id) => Ok(id),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(ApiError::NotFound(raw.to_string()))
        }
        Err(_) => Err(ApiError::InvalidId(raw.to_string())),
    }
}

pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(raw) = id.map_err(|e| ApiError::InvalidId(e.body_text()))?;
    let id = parse_book_id(&raw)?;

    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound(raw))
}

pub async fn top_rated(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.catalog.top_rated().into_iter().cloned().collect())
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}
