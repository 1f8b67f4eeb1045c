//! # Rendering Module
//!
//! Draws countdown frames onto an RGBA canvas.
//!
//! ## Modules
//!
//! - [`canvas`]: Reusable RGBA surface with source-over blending
//! - [`shape`]: Circle and rounded-rectangle distance fields, fill and stroke
//! - [`text`]: Centered TTF text with ab_glyph
//! - [`layout`]: Box placement and canvas dimensions
//! - [`frame`]: Per-frame drawing of all unit boxes
//!
//! ## Usage Example
//!
//! ```
//! use countdown_gif::config::CountdownConfig;
//! use countdown_gif::render::frame::{FrameRenderer, FrameStyle};
//!
//! let style = FrameStyle::from_config(&CountdownConfig::default())?;
//! let mut renderer = FrameRenderer::new(style);
//!
//! // 1 hour, 2 minutes, 3 seconds left
//! let frame = renderer.render(3_723_000);
//! assert_eq!(frame.dimensions(), (416, 156));
//! # Ok::<(), countdown_gif::CountdownError>(())
//! ```

pub mod canvas;
pub mod frame;
pub mod layout;
pub mod shape;
pub mod text;
