//! # Frame Sequencer
//!
//! Renders a countdown ticking down one second per frame and encodes the
//! frames as a looping GIF.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::io::Write;
use tracing::debug;

use crate::config::CountdownConfig;
use crate::error::CountdownError;
use crate::render::frame::{FrameRenderer, FrameStyle};

/// Frames per GIF.
pub const FRAME_COUNT: usize = 30;
/// Delay between frames: one real second per countdown second.
pub const FRAME_DELAY_MS: u32 = 1000;
/// Color quantization speed handed to the encoder (1 = best, 30 = fastest).
pub const ENCODER_SPEED: i32 = 10;

/// Remaining time shown by frame `index`. Not clamped; decomposition clamps.
pub fn frame_remaining_ms(diff_ms: i64, index: usize) -> i64 {
    diff_ms.saturating_sub(index as i64 * 1000)
}

/// Render a complete countdown GIF into memory.
pub fn render_gif(config: &CountdownConfig, diff_ms: i64) -> Result<Vec<u8>, CountdownError> {
    let style = FrameStyle::from_config(config)?;
    let mut renderer = FrameRenderer::new(style);

    let mut buf = Vec::new();
    encode(&mut renderer, diff_ms, &mut buf)?;

    let layout = renderer.layout();
    debug!(
        frames = FRAME_COUNT,
        width = layout.width,
        height = layout.height,
        bytes = buf.len(),
        "encoded countdown gif"
    );
    Ok(buf)
}

/// Encode all frames to `writer`. The GIF trailer is written when the
/// encoder is dropped at the end of this call.
pub fn encode<W: Write>(
    renderer: &mut FrameRenderer,
    diff_ms: i64,
    writer: W,
) -> Result<(), CountdownError> {
    let mut encoder = GifEncoder::new_with_speed(writer, ENCODER_SPEED);
    encoder.set_repeat(Repeat::Infinite)?;

    for index in 0..FRAME_COUNT {
        let image = renderer.render(frame_remaining_ms(diff_ms, index)).clone();
        let frame = Frame::from_parts(
            image,
            0,
            0,
            Delay::from_numer_denom_ms(FRAME_DELAY_MS, 1),
        );
        encoder.encode_frame(frame)?;
    }

    Ok(())
}
