//! Health check.

/// Handle GET / and GET /health.
pub async fn health() -> &'static str {
    "OK"
}
