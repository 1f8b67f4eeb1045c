//! HTTP handlers for the server.

pub mod countdown;
pub mod health;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::error::CountdownError;

impl CountdownError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CountdownError::Unauthorized => StatusCode::UNAUTHORIZED,
            CountdownError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors become short plain-text responses; details stay in the log.
impl IntoResponse for CountdownError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            CountdownError::Unauthorized => "Unauthorized".to_string(),
            CountdownError::Validation(msg) => msg.clone(),
            other => format!("Error: {}", other),
        };

        if status.is_server_error() {
            error!(error = ?self, "request failed");
        } else {
            warn!(%status, error = %self, "request rejected");
        }

        (status, body).into_response()
    }
}
