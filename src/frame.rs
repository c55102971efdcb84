//! The pixel-grid frame model

use crate::color::{Color, PixelColor};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Side length of character frames.
pub const CHARACTER_FRAME_SIZE: usize = 24;

/// Side length of effect frames.
pub const EFFECT_FRAME_SIZE: usize = 32;

/// Sprite classes with fixed frame dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameClass {
    /// 24x24 fighter poses
    Character,
    /// 32x32 technique and hit effects
    Effect,
}

impl FrameClass {
    /// `(width, height)` of every frame in this class.
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            FrameClass::Character => (CHARACTER_FRAME_SIZE, CHARACTER_FRAME_SIZE),
            FrameClass::Effect => (EFFECT_FRAME_SIZE, EFFECT_FRAME_SIZE),
        }
    }
}

/// A fixed-size, row-major grid of pixels.
///
/// `Clone` is a deep copy: the clone owns its own buffer, so painting into
/// one frame never shows up in the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<PixelColor>,
}

impl Frame {
    /// Allocate a fully transparent frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    /// Allocate a blank frame sized for a sprite class.
    pub fn blank(class: FrameClass) -> Self {
        let (width, height) = class.dimensions();
        Self::new(width, height)
    }

    /// Build a `width` x `height` frame from rows of pixels. All rows must
    /// share a length; a zero-width frame has no pixels but keeps its height.
    pub(crate) fn from_rows(width: usize, height: usize, rows: Vec<Vec<PixelColor>>) -> Self {
        let pixels: Vec<PixelColor> = rows.into_iter().flatten().collect();
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Pixel at `(x, y)`; transparent when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> PixelColor {
        self.index(x, y).and_then(|i| self.pixels[i])
    }

    /// Whether `(x, y)` holds any color, translucent included.
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Write one pixel. Out-of-bounds coordinates are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: PixelColor) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[PixelColor]> {
        // chunks_exact(0) panics, so zero-width frames yield no rows
        self.pixels.chunks_exact(self.width.max(1)).take(self.height)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[PixelColor] {
        &self.pixels
    }

    /// Number of non-transparent pixels.
    pub fn filled_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    /// Distinct colors in first-seen order.
    pub fn colors(&self) -> Vec<Color> {
        let mut seen = Vec::new();
        for color in self.pixels.iter().flatten() {
            if !seen.contains(color) {
                seen.push(*color);
            }
        }
        seen
    }
}

/// Serializes as nested rows of color strings, with `null` for transparent.
impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
