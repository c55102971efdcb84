//! Rasterize frames into RGBA image buffers

use crate::animation::Animation;
use crate::frame::Frame;
use crate::spritesheet::render_spritesheet;
use image::{Rgba, RgbaImage};

/// Transparent color used for empty pixels
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Render a frame to an RGBA image buffer.
///
/// Solid pixels are fully opaque; translucent pixels map their opacity to
/// the alpha channel; transparent pixels become `[0, 0, 0, 0]`.
///
/// # Examples
///
/// ```
/// use pixelbrawl::color::Color;
/// use pixelbrawl::frame::Frame;
/// use pixelbrawl::renderer::frame_to_image;
///
/// let mut frame = Frame::new(2, 1);
/// frame.set(0, 0, Some(Color::rgb(255, 0, 0)));
///
/// let image = frame_to_image(&frame);
/// assert_eq!(image.dimensions(), (2, 1));
/// assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
/// assert_eq!(image.get_pixel(1, 0).0, [0, 0, 0, 0]);
/// ```
pub fn frame_to_image(frame: &Frame) -> RgbaImage {
    let (width, height) = frame.dimensions();
    let mut image = RgbaImage::from_pixel(width as u32, height as u32, TRANSPARENT);
    for (y, row) in frame.rows().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            if let Some(color) = pixel {
                image.put_pixel(x as u32, y as u32, color.to_rgba());
            }
        }
    }
    image
}

/// Render every frame of an animation.
pub fn animation_images(animation: &Animation) -> Vec<RgbaImage> {
    animation.frames().iter().map(frame_to_image).collect()
}

/// Render an animation as a single strip (or grid with `cols`).
pub fn render_animation_strip(animation: &Animation, cols: Option<u32>) -> RgbaImage {
    render_spritesheet(&animation_images(animation), cols)
}
