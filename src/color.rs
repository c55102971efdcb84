//! Pixel colors and color-string parsing
//!
//! Every painted pixel carries a [`Color`]: an RGB triple with an optional
//! opacity. Solid colors print as `#rrggbb`, translucent ones as
//! `rgba(r,g,b,0.45)`. Those two forms are the only encodings a frame ever
//! emits, so downstream canvas code can use them as-is.
//!
//! Parsing accepts any CSS color string:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `oklch()`
//! - Named: `red`, `blue`, etc.

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single frame cell: `None` is transparent.
pub type PixelColor = Option<Color>;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// Opacity in hundredths, `0..=100`.
///
/// Alpha values are quantized to two decimals when painted, which keeps
/// frames `Eq` and their textual form stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    pub const ZERO: Opacity = Opacity(0);
    pub const FULL: Opacity = Opacity(100);

    /// Build from hundredths, clamped to 100.
    pub const fn from_hundredths(value: u8) -> Self {
        if value > 100 {
            Opacity(100)
        } else {
            Opacity(value)
        }
    }

    /// Round a fractional alpha to hundredths, clamping to `[0, 1]`.
    pub fn from_fraction(alpha: f64) -> Self {
        let clamped = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Opacity((clamped * 100.0).round() as u8)
    }

    pub fn hundredths(self) -> u8 {
        self.0
    }

    /// Map to an 8-bit alpha channel.
    pub fn to_alpha_u8(self) -> u8 {
        ((u32::from(self.0) * 255 + 50) / 100) as u8
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A concrete pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// `None` for solid colors.
    pub opacity: Option<Opacity>,
}

impl Color {
    /// Solid color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            opacity: None,
        }
    }

    /// Translucent color with opacity given in hundredths.
    pub const fn rgba(r: u8, g: u8, b: u8, hundredths: u8) -> Self {
        Self {
            r,
            g,
            b,
            opacity: Some(Opacity::from_hundredths(hundredths)),
        }
    }

    pub fn is_solid(&self) -> bool {
        self.opacity.is_none()
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to an 8-bit RGBA pixel.
    pub fn to_rgba(&self) -> Rgba<u8> {
        let a = self.opacity.map_or(255, Opacity::to_alpha_u8);
        Rgba([self.r, self.g, self.b, a])
    }

    /// Build from an 8-bit RGBA pixel. Fully opaque pixels become solid.
    pub fn from_rgba(rgba: Rgba<u8>) -> Self {
        let [r, g, b, a] = rgba.0;
        if a == 255 {
            Self::rgb(r, g, b)
        } else {
            let hundredths = (u32::from(a) * 100 + 127) / 255;
            Self::rgba(r, g, b, hundredths as u8)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opacity {
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            Some(alpha) => write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, alpha),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).map(Color::from_rgba)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a CSS color string into an RGBA pixel.
///
/// # Examples
///
/// ```
/// use pixelbrawl::color::parse_color;
///
/// let red = parse_color("#F00").unwrap();
/// assert_eq!(red, image::Rgba([255, 0, 0, 255]));
///
/// let green = parse_color("rgb(0, 255, 0)").unwrap();
/// assert_eq!(green, image::Rgba([0, 255, 0, 255]));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is invalid or unparseable.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    // Fast path for hex colors
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    parse_css_color(s)
}

/// Parse the digits of a hex color (#RGB, #RGBA, #RRGGBB, #RRGGBBAA)
fn parse_hex_color(hex: &str) -> Result<Rgba<u8>, ColorError> {
    let digits = hex
        .chars()
        .map(parse_hex_digit)
        .collect::<Result<Vec<u8>, ColorError>>()?;

    match digits.as_slice() {
        // Short forms double each digit
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, 255])),
        [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Rgba([
            r1 * 16 + r0,
            g1 * 16 + g0,
            b1 * 16 + b0,
            a1 * 16 + a0,
        ])),
        _ => Err(ColorError::InvalidLength(digits.len())),
    }
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, oklch, named colors)
fn parse_css_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    css_color_to_rgba(css_color)
}

/// Convert a lightningcss CssColor to RGBA
fn css_color_to_rgba(color: CssColor) -> Result<Rgba<u8>, ColorError> {
    use lightningcss::values::color::FloatColor;

    let rgb_color = color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok(Rgba([rgba.red, rgba.green, rgba.blue, rgba.alpha])),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => {
                let r = (rgb.r * 255.0).round() as u8;
                let g = (rgb.g * 255.0).round() as u8;
                let b = (rgb.b * 255.0).round() as u8;
                let a = (rgb.alpha * 255.0).round() as u8;
                Ok(Rgba([r, g, b, a]))
            }
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c))
}
