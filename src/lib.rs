//! Pixelbrawl - procedural pixel-art sprites for a 2D fighting game
//!
//! This library provides functionality to:
//! - Paint fixed-size frames with a handful of drawing primitives
//! - Generate character animations from declarative pose tables
//! - Generate technique and hit-effect animations
//! - Render sheets to PNG strips, GIF previews, JSON and the terminal
//!
//! Every sheet is built once, deterministically, and shared read-only:
//!
//! ```
//! use pixelbrawl::animation::Action;
//! use pixelbrawl::characters::BRAWLER_SHEET;
//!
//! let idle = BRAWLER_SHEET.get(Action::Idle);
//! assert_eq!(idle.len(), 2);
//! assert_eq!(idle.frame_duration_ms(), 250);
//! assert_eq!(idle.frame_at(600).dimensions(), (24, 24));
//! ```

pub mod animation;
pub mod catalog;
pub mod characters;
pub mod cli;
pub mod color;
pub mod config;
pub mod draw;
pub mod effects;
pub mod export;
pub mod frame;
pub mod gif;
pub mod output;
pub mod pose;
pub mod renderer;
pub mod spritesheet;
pub mod terminal;
pub mod transforms;
