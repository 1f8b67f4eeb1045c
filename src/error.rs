//! # Error Types
//!
//! This module defines error types used throughout the countdown-gif crate.

use thiserror::Error;

/// Main error type for countdown rendering and serving
#[derive(Debug, Error)]
pub enum CountdownError {
    /// Missing or wrong bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Request body is missing a required field or is malformed
    #[error("{0}")]
    Validation(String),

    /// A color string could not be parsed
    #[error("Invalid color: {0}")]
    Color(String),

    /// Font loading error
    #[error("Font error: {0}")]
    Font(String),

    /// Frame drawing or sequencing error
    #[error("Render error: {0}")]
    Render(String),

    /// GIF encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Listener / server-level errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper (CLI config files)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
