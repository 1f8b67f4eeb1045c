//! Bearer-token authentication for the render endpoint.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::CountdownError;

use super::state::AppState;

/// Reject requests whose `Authorization` header is not `Bearer <api key>`.
///
/// Passes everything through when no API key is configured.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, CountdownError> {
    if let Some(expected) = state.api_key() {
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        if !provided.is_some_and(|token| token_matches(token, expected)) {
            return Err(CountdownError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}

/// Compare tokens without short-circuiting on the first differing byte.
fn token_matches(provided: &str, expected: &str) -> bool {
    let a = provided.as_bytes();
    let b = expected.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
