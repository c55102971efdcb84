//! Animated GIF previews

use crate::animation::Animation;
use crate::output::{ensure_parent_dir, scale_image, OutputError};
use crate::renderer::animation_images;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// GIF delays are stored in centiseconds, with a floor of one.
fn gif_delay(duration_ms: u32) -> Delay {
    let delay_cs = (duration_ms / 10).max(1);
    Delay::from_numer_denom_ms(delay_cs * 10, 1)
}

/// Encode images as an animated GIF, every frame shown for `duration_ms`.
///
/// An empty frame list writes nothing.
pub fn render_gif(
    frames: &[RgbaImage],
    duration_ms: u32,
    loop_anim: bool,
    path: &Path,
) -> Result<(), OutputError> {
    if frames.is_empty() {
        return Ok(());
    }
    ensure_parent_dir(path)?;

    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(if loop_anim {
        Repeat::Infinite
    } else {
        Repeat::Finite(0)
    })?;

    let delay = gif_delay(duration_ms);
    for rgba_image in frames {
        let frame = image::Frame::from_parts(rgba_image.clone(), 0, 0, delay);
        encoder.encode_frame(frame)?;
    }

    log::info!("wrote {}", path.display());
    Ok(())
}

/// Write a looping preview of `animation`, upscaled by `scale`.
pub fn render_animation_gif(
    animation: &Animation,
    scale: u32,
    path: &Path,
) -> Result<(), OutputError> {
    let frames: Vec<RgbaImage> = animation_images(animation)
        .into_iter()
        .map(|image| scale_image(image, scale))
        .collect();
    render_gif(&frames, animation.frame_duration_ms(), true, path)
}
