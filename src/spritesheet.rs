//! Spritesheet layout - packs animation frames into one image

use image::{imageops, Rgba, RgbaImage};
use serde::Serialize;

/// Transparent color used for padding
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Position of one frame inside a packed sheet image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Grid shape for `count` frames: `(columns, rows)`.
///
/// Without `cols` every frame goes in one row. `cols` is clamped to
/// `1..=count`.
pub fn grid_shape(count: u32, cols: Option<u32>) -> (u32, u32) {
    if count == 0 {
        return (1, 1);
    }
    let columns = cols.unwrap_or(count).clamp(1, count);
    (columns, count.div_ceil(columns))
}

/// Where frame `index` lands in a grid of `cols` columns of `w x h` cells.
pub fn cell_rect(index: u32, columns: u32, w: u32, h: u32) -> CellRect {
    CellRect {
        x: (index % columns) * w,
        y: (index / columns) * h,
        w,
        h,
    }
}

/// Render multiple frames into a spritesheet grid.
///
/// Frames are placed left to right, wrapping after `cols` columns (one row
/// when `cols` is `None`). Cells are sized to the largest frame; smaller
/// frames sit in the top-left corner of their cell.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use pixelbrawl::spritesheet::render_spritesheet;
///
/// let frame = RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
/// let frames = vec![frame.clone(), frame.clone(), frame.clone(), frame];
///
/// let strip = render_spritesheet(&frames, None);
/// assert_eq!(strip.dimensions(), (8, 2));
///
/// let grid = render_spritesheet(&frames, Some(2));
/// assert_eq!(grid.dimensions(), (4, 4));
/// ```
pub fn render_spritesheet(frames: &[RgbaImage], cols: Option<u32>) -> RgbaImage {
    if frames.is_empty() {
        return RgbaImage::from_pixel(1, 1, TRANSPARENT);
    }

    let cell_w = frames.iter().map(|f| f.width()).max().unwrap_or(1);
    let cell_h = frames.iter().map(|f| f.height()).max().unwrap_or(1);
    let (columns, rows) = grid_shape(frames.len() as u32, cols);

    let mut sheet = RgbaImage::from_pixel(columns * cell_w, rows * cell_h, TRANSPARENT);
    for (i, frame) in frames.iter().enumerate() {
        let cell = cell_rect(i as u32, columns, cell_w, cell_h);
        imageops::replace(&mut sheet, frame, i64::from(cell.x), i64::from(cell.y));
    }
    sheet
}
