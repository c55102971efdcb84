//! Terminal rendering utilities for frame previews
//!
//! Provides ANSI escape sequence generation for displaying frames with
//! true-color backgrounds in terminal emulators that support 24-bit color,
//! plus a glyph-only fallback for pipes and dumb terminals.

use crate::color::Color;
use crate::frame::Frame;
use image::Rgba;

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Background drawn behind transparent pixels (xterm-256 gray 236).
const CHECKER: [u8; 3] = [48, 48, 48];

/// Glyph for fully opaque pixels in plain output
pub const SOLID_GLYPH: char = '#';

/// Glyph for translucent pixels in plain output
pub const TRANSLUCENT_GLYPH: char = '+';

/// Convert RGBA color to ANSI 24-bit background escape sequence.
///
/// Transparent colors (alpha = 0) are rendered as a dark gray background
/// to visually distinguish them from opaque colors.
///
/// # Examples
///
/// ```
/// use pixelbrawl::terminal::color_to_ansi_bg;
/// use image::Rgba;
///
/// let red = color_to_ansi_bg(Rgba([255, 0, 0, 255]));
/// assert_eq!(red, "\x1b[48;2;255;0;0m");
///
/// let transparent = color_to_ansi_bg(Rgba([0, 0, 0, 0]));
/// assert_eq!(transparent, "\x1b[48;5;236m");
/// ```
pub fn color_to_ansi_bg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        "\x1b[48;5;236m".to_string()
    } else {
        format!("\x1b[48;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Composite a translucent color over the transparent-pixel background.
fn over_checker(color: &Color) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = color.to_rgba();
    if a == 255 || a == 0 {
        return Rgba([r, g, b, a]);
    }
    let mix = |fg: u8, bg: u8| -> u8 {
        ((u32::from(fg) * u32::from(a) + u32::from(bg) * (255 - u32::from(a)) + 127) / 255) as u8
    };
    Rgba([mix(r, CHECKER[0]), mix(g, CHECKER[1]), mix(b, CHECKER[2]), 255])
}

/// Render a frame with ANSI background colors.
///
/// Each pixel becomes two spaces so the preview keeps a roughly square
/// aspect ratio. Every row ends with a reset and a newline.
pub fn render_ansi_frame(frame: &Frame) -> String {
    let mut output = String::new();
    for row in frame.rows() {
        for pixel in row {
            let rgba = match pixel {
                Some(color) => over_checker(color),
                None => Rgba([0, 0, 0, 0]),
            };
            output.push_str(&color_to_ansi_bg(rgba));
            output.push_str("  ");
        }
        output.push_str(ANSI_RESET);
        output.push('\n');
    }
    output
}

/// Render a frame as plain glyphs, one character per pixel.
///
/// Solid pixels print [`SOLID_GLYPH`], translucent ones
/// [`TRANSLUCENT_GLYPH`], transparent ones `transparent`.
///
/// # Examples
///
/// ```
/// use pixelbrawl::color::Color;
/// use pixelbrawl::frame::Frame;
/// use pixelbrawl::terminal::render_plain_frame;
///
/// let mut frame = Frame::new(3, 1);
/// frame.set(0, 0, Some(Color::rgb(255, 0, 0)));
/// frame.set(1, 0, Some(Color::rgba(255, 0, 0, 50)));
/// assert_eq!(render_plain_frame(&frame, '.'), "#+.\n");
/// ```
pub fn render_plain_frame(frame: &Frame, transparent: char) -> String {
    let mut output = String::with_capacity((frame.width() + 1) * frame.height());
    for row in frame.rows() {
        output.extend(row.iter().map(|pixel| match pixel {
            Some(color) if color.is_solid() => SOLID_GLYPH,
            Some(_) => TRANSLUCENT_GLYPH,
            None => transparent,
        }));
        output.push('\n');
    }
    output
}

/// Whether stdout is an interactive terminal.
pub fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Render with colors on a terminal, glyphs otherwise.
pub fn render_frame(frame: &Frame, transparent: char) -> String {
    if stdout_is_tty() {
        render_ansi_frame(frame)
    } else {
        render_plain_frame(frame, transparent)
    }
}
