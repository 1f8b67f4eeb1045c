//! Countdown GIF handler.

use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{de, Deserialize, Deserializer};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::config::CountdownConfig;
use crate::error::CountdownError;
use crate::sequence;

/// Body of POST /generate-gif.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub config: Option<CountdownConfig>,
    /// Milliseconds until the countdown target. May be negative.
    #[serde(rename = "diffMs", default, deserialize_with = "deserialize_diff_ms")]
    pub diff_ms: Option<i64>,
}

/// Accept integers, and floats floored to whole milliseconds.
fn deserialize_diff_ms<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    number
        .as_i64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.floor() as i64)
        })
        .map(Some)
        .ok_or_else(|| de::Error::custom("diffMs must be a finite number"))
}

impl GenerateRequest {
    /// Both fields are required.
    pub fn validate(self) -> Result<(CountdownConfig, i64), CountdownError> {
        let config = self
            .config
            .ok_or_else(|| CountdownError::Validation("Missing config".to_string()))?;
        let diff_ms = self
            .diff_ms
            .ok_or_else(|| CountdownError::Validation("Missing diffMs".to_string()))?;
        Ok((config, diff_ms))
    }
}

/// Handle POST /generate-gif - render the countdown as an animated GIF.
pub async fn generate_gif(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CountdownError> {
    let Json(request) = payload.map_err(|e| CountdownError::Validation(e.body_text()))?;
    let (config, diff_ms) = request.validate()?;

    let render_id = Uuid::new_v4();
    let span = info_span!("render", %render_id, template = config.template(), diff_ms);

    // Rendering is CPU-bound; keep it off the async workers.
    let gif = tokio::task::spawn_blocking(move || {
        let _guard = span.enter();
        sequence::render_gif(&config, diff_ms)
    })
    .await
    .map_err(|e| CountdownError::Render(format!("render task failed: {}", e)))??;

    info!(%render_id, bytes = gif.len(), "countdown gif rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "image/gif"),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
        ],
        gif,
    ))
}
