//! Raw frame export.
//!
//! Every frame is written as an array of rows, each cell either a color
//! string (`#rrggbb` or `rgba(r,g,b,a)`) or `null` for transparency:
//!
//! ```json
//! {
//!   "name": "impact",
//!   "width": 32,
//!   "height": 32,
//!   "animations": [
//!     { "name": "impact", "frame_duration_ms": 50, "frames": [[[null, "rgba(255,180,122,0.5)"]]] }
//!   ]
//! }
//! ```

use crate::catalog::SheetId;
use crate::export::{to_json, ExportOptions, Result};
use crate::frame::Frame;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FramesAnimation {
    pub name: &'static str,
    pub frame_duration_ms: u32,
    pub frames: &'static [Frame],
}

/// All frames of one sheet.
#[derive(Debug, Serialize)]
pub struct FramesDocument {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub animations: Vec<FramesAnimation>,
}

impl FramesDocument {
    pub fn new(sheet: SheetId) -> Self {
        let (width, height) = sheet.frame_class().dimensions();
        Self {
            name: sheet.name(),
            width,
            height,
            animations: sheet
                .animations()
                .into_iter()
                .map(|entry| FramesAnimation {
                    name: entry.label(),
                    frame_duration_ms: entry.animation.frame_duration_ms(),
                    frames: entry.animation.frames(),
                })
                .collect(),
        }
    }
}

/// Serialize a sheet's frames under the pixel contract.
pub fn frames_json(sheet: SheetId, options: &ExportOptions) -> Result<String> {
    to_json(&FramesDocument::new(sheet), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::Archetype;
    use crate::color::Color;
    use crate::effects::Effect;

    fn parsed(sheet: SheetId) -> serde_json::Value {
        let options = ExportOptions {
            pretty: false,
            ..Default::default()
        };
        serde_json::from_str(&frames_json(sheet, &options).unwrap()).unwrap()
    }

    #[test]
    fn test_character_frames_document() {
        let value = parsed(SheetId::Character(Archetype::Brawler));
        assert_eq!(value["name"], "brawler");
        assert_eq!(value["width"], 24);
        assert_eq!(value["animations"].as_array().unwrap().len(), 8);

        let idle = &value["animations"][0];
        assert_eq!(idle["name"], "idle");
        assert_eq!(idle["frame_duration_ms"], 250);
        let frames = idle["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].as_array().unwrap().len(), 24);
        assert_eq!(frames[0][0].as_array().unwrap().len(), 24);
        assert!(frames[0][0][0].is_null());
    }

    #[test]
    fn test_cells_obey_pixel_contract() {
        let value = parsed(SheetId::Effect(Effect::LightningBlade));
        for frame in value["animations"][0]["frames"].as_array().unwrap() {
            for row in frame.as_array().unwrap() {
                for cell in row.as_array().unwrap() {
                    if let Some(text) = cell.as_str() {
                        assert!(text.parse::<Color>().is_ok(), "bad cell {}", text);
                    } else {
                        assert!(cell.is_null());
                    }
                }
            }
        }
    }

    #[test]
    fn test_orb_center_is_serialized() {
        let value = parsed(SheetId::Effect(Effect::ChakraSphere));
        assert_eq!(value["animations"][0]["frames"][0][16][16], "rgba(94,214,255,0.75)");
    }
}
