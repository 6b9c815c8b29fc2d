use crate::models::responses::ErrorResponse;
use crate::services::query::QueryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors reported back to API clients.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing or invalid API key")]
    Unauthorized,
    #[error("book {0} not found")]
    NotFound(String),
    #[error("book id {0:?} is not a number")]
    InvalidId(String),
    #[error(transparent)]
    InvalidFilter(#[from] QueryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidId(_) | ApiError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized",
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::InvalidFilter(_) => "invalid_filter",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.kind().to_string(),
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
