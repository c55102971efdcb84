//! Sheet manifests describing the PNG strips.
//!
//! # Output Format
//!
//! ```json
//! {
//!   "name": "brawler",
//!   "frame_size": [24, 24],
//!   "scale": 1,
//!   "animations": [
//!     {
//!       "name": "idle",
//!       "image": "brawler_idle.png",
//!       "frames": 2,
//!       "frame_duration_ms": 250,
//!       "total_duration_ms": 500,
//!       "size": [48, 24],
//!       "cells": [{ "x": 0, "y": 0, "w": 24, "h": 24 }, { "x": 24, "y": 0, "w": 24, "h": 24 }]
//!     }
//!   ]
//! }
//! ```

use crate::catalog::{SheetAnimation, SheetId};
use crate::export::ExportOptions;
use crate::spritesheet::{cell_rect, grid_shape, CellRect};
use serde::Serialize;
use std::path::Path;

/// Layout and timing of one animation strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationEntry {
    pub name: &'static str,
    /// File name of the strip, relative to the manifest
    pub image: String,
    pub frames: usize,
    pub frame_duration_ms: u32,
    pub total_duration_ms: u64,
    /// Strip dimensions in pixels
    pub size: [u32; 2],
    pub cells: Vec<CellRect>,
}

/// Every animation of one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetManifest {
    pub name: &'static str,
    /// Unscaled frame dimensions
    pub frame_size: [u32; 2],
    pub scale: u32,
    pub animations: Vec<AnimationEntry>,
}

impl AnimationEntry {
    fn new(entry: &SheetAnimation, options: &ExportOptions) -> Self {
        let animation = entry.animation;
        let scale = options.scale.max(1);
        let (w, h) = animation.frame_dimensions();
        let (cell_w, cell_h) = (w as u32 * scale, h as u32 * scale);
        let count = animation.len() as u32;
        let (columns, rows) = grid_shape(count, options.columns);

        let image = entry
            .output_path(Path::new(""), "png")
            .to_string_lossy()
            .into_owned();

        Self {
            name: entry.label(),
            image,
            frames: animation.len(),
            frame_duration_ms: animation.frame_duration_ms(),
            total_duration_ms: animation.total_duration_ms(),
            size: [columns * cell_w, rows * cell_h],
            cells: (0..count)
                .map(|i| cell_rect(i, columns, cell_w, cell_h))
                .collect(),
        }
    }
}

impl SheetManifest {
    /// Describe `sheet` as rendered with `options.scale` and `options.columns`.
    pub fn new(sheet: SheetId, options: &ExportOptions) -> Self {
        let (w, h) = sheet.frame_class().dimensions();
        Self {
            name: sheet.name(),
            frame_size: [w as u32, h as u32],
            scale: options.scale.max(1),
            animations: sheet
                .animations()
                .iter()
                .map(|entry| AnimationEntry::new(entry, options))
                .collect(),
        }
    }

    /// Look up an animation entry by name.
    pub fn animation(&self, name: &str) -> Option<&AnimationEntry> {
        self.animations.iter().find(|a| a.name == name)
    }

    /// Sum of all animation frame counts.
    pub fn frame_count(&self) -> usize {
        self.animations.iter().map(|a| a.frames).sum()
    }
}
