use crate::error::ApiError;
use crate::services::auth::API_KEY_HEADER;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// Rejects the request with `Unauthorized` unless the `X-API-Key` header
/// carries the configured secret. A missing header counts as an empty key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if !state.gate.authorize(presented) {
        warn!("Rejected request to {}: invalid API key", request.uri().path());
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
