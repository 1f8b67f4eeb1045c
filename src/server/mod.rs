//! # HTTP Server for Countdown GIFs
//!
//! Serves rendered countdown timers over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! RENDER_API_KEY=secret countdown-gif serve --port 3000
//! ```
//!
//! ## Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /`, `GET /health` | Liveness check, always unauthenticated |
//! | `POST /generate-gif` | Render a countdown GIF (bearer auth if an API key is set) |

mod auth;
mod handlers;
mod state;

pub use handlers::countdown::GenerateRequest;
pub use state::{AppState, ServerConfig};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::CountdownError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health::health))
        .route("/health", get(handlers::health::health))
        .route(
            "/generate-gif",
            post(handlers::countdown::generate_gif).route_layer(
                middleware::from_fn_with_state(state.clone(), auth::require_bearer),
            ),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Fonts should be registered with [`crate::fonts::init`] before calling this.
///
/// ## Example
///
/// ```no_run
/// use countdown_gif::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), countdown_gif::CountdownError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:3000".to_string(),
///     api_key: Some("secret".to_string()),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), CountdownError> {
    let app_state = Arc::new(AppState::new(config.clone()));

    if app_state.api_key().is_none() {
        warn!("no API key configured, /generate-gif is open to everyone");
    }

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            CountdownError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(listen_addr = %config.listen_addr, "countdown service running");

    axum::serve(listener, app)
        .await
        .map_err(|e| CountdownError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
