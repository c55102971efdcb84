//! Frame transforms: symbol grids, integer upscaling, mirroring

use crate::color::PixelColor;
use crate::frame::Frame;
use std::collections::HashMap;
use thiserror::Error;

/// Maps a grid symbol to its pixel. Missing symbols are transparent.
pub type SymbolPalette = HashMap<char, PixelColor>;

/// Error type for building frames from symbol rows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// No rows, or rows without symbols
    #[error("empty symbol grid")]
    Empty,
    /// A row's length differs from the first row's
    #[error("row {row} has {found} symbols, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Build a frame from rows of symbols, one pixel per `char`.
///
/// Row count and row length define the frame's dimensions.
///
/// # Examples
///
/// ```
/// use pixelbrawl::color::Color;
/// use pixelbrawl::transforms::{frame_from_palette, SymbolPalette};
///
/// let palette = SymbolPalette::from([('A', Some(Color::rgb(255, 255, 255))), ('B', None)]);
/// let frame = frame_from_palette(&["AB", "BA"], &palette).unwrap();
/// assert_eq!(frame.dimensions(), (2, 2));
/// assert!(frame.is_filled(0, 0));
/// assert!(!frame.is_filled(1, 0));
/// ```
///
/// # Errors
///
/// `FrameError::Empty` for an empty grid, `FrameError::RaggedRow` when rows
/// differ in length.
pub fn frame_from_palette<S: AsRef<str>>(
    rows: &[S],
    palette: &SymbolPalette,
) -> Result<Frame, FrameError> {
    let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
    if width == 0 {
        return Err(FrameError::Empty);
    }

    let mut grid = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let pixels: Vec<PixelColor> = row
            .as_ref()
            .chars()
            .map(|symbol| palette.get(&symbol).copied().flatten())
            .collect();
        if pixels.len() != width {
            return Err(FrameError::RaggedRow {
                row: i + 1,
                expected: width,
                found: pixels.len(),
            });
        }
        grid.push(pixels);
    }

    let height = grid.len();
    Ok(Frame::from_rows(width, height, grid))
}

/// Scale a frame by an integer factor using nearest-neighbor sampling.
///
/// Each source pixel becomes a `factor x factor` block. A factor of 1 (or 0)
/// returns an equal copy.
pub fn scale(frame: &Frame, factor: u32) -> Frame {
    if factor <= 1 {
        return frame.clone();
    }
    let factor = factor as usize;
    let rows = frame
        .rows()
        .flat_map(|row| {
            let scaled: Vec<PixelColor> = row
                .iter()
                .flat_map(|&pixel| std::iter::repeat(pixel).take(factor))
                .collect();
            std::iter::repeat(scaled).take(factor)
        })
        .collect();
    Frame::from_rows(frame.width() * factor, frame.height() * factor, rows)
}

/// Reverse each row. Row order and dimensions are unchanged.
pub fn mirror_horizontal(frame: &Frame) -> Frame {
    let rows = frame
        .rows()
        .map(|row| row.iter().rev().copied().collect())
        .collect();
    Frame::from_rows(frame.width(), frame.height(), rows)
}
