//! # Countdown GIF - Animated Countdown Timer Renderer
//!
//! Renders a countdown timer as a looping, 30-frame GIF that ticks down one
//! second per frame. It provides:
//!
//! - **Configuration**: colors, labels, fonts and a template style
//! - **Rendering**: square, rounded, circle and digits-only unit boxes with
//!   filled or bordered outlines and inside or outside labels
//! - **Sequencing**: frame timing and GIF encoding
//! - **HTTP service**: `POST /generate-gif` with optional bearer auth
//!
//! ## Quick Start
//!
//! ```
//! use countdown_gif::{config::CountdownConfig, sequence};
//!
//! let config: CountdownConfig = serde_json::from_str(r##"{
//!     "template": "rounded-md-border-inside",
//!     "box_color": "#1D4ED8",
//!     "display_days": false
//! }"##)?;
//!
//! // 2 hours, 30 minutes left
//! let gif = sequence::render_gif(&config, 9_000_000)?;
//! assert_eq!(&gif[..6], b"GIF89a");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Request configuration and color parsing |
//! | [`template`] | Template string to shape traits |
//! | [`countdown`] | Time decomposition and unit selection |
//! | [`fonts`] | Process-wide font registry |
//! | [`render`] | Canvas, shapes, text and frame drawing |
//! | [`sequence`] | Frame sequencing and GIF encoding |
//! | [`server`] | HTTP service |
//! | [`error`] | Error types |

pub mod config;
pub mod countdown;
pub mod error;
pub mod fonts;
pub mod render;
pub mod sequence;
pub mod server;
pub mod template;

// Re-exports for convenience
pub use config::CountdownConfig;
pub use error::CountdownError;
pub use sequence::render_gif;
