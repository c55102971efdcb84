//! JSON export of sheets.
//!
//! Two documents are produced:
//!
//! - **Manifest** ([`SheetManifest`]): frame size, timing and strip layout
//!   of every animation in a sheet, pointing at the PNG strips written by
//!   `pxb render`.
//! - **Frames** ([`frames_json`]): the raw pixels of every frame as nested
//!   rows of color strings, `null` for transparent cells.
//!
//! # Example
//!
//! ```
//! use pixelbrawl::catalog::SheetId;
//! use pixelbrawl::export::{ExportOptions, SheetManifest};
//!
//! let brawler: SheetId = "brawler".parse().unwrap();
//! let manifest = SheetManifest::new(brawler, &ExportOptions::default());
//! assert_eq!(manifest.animations[0].name, "idle");
//! assert_eq!(manifest.animations[0].frames, 2);
//! ```

pub mod frames;
pub mod manifest;

pub use frames::*;
pub use manifest::*;

use crate::output::ensure_parent_dir;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Common error type for export operations.
#[derive(Debug)]
pub enum ExportError {
    /// IO error during file writing
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}

impl From<crate::output::OutputError> for ExportError {
    fn from(e: crate::output::OutputError) -> Self {
        match e {
            crate::output::OutputError::Io(e) => ExportError::Io(e),
            other => ExportError::Serialization(other.to_string()),
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Options for export operations.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty print output (with indentation)
    pub pretty: bool,
    /// Upscale factor the PNG strips were written with
    pub scale: u32,
    /// Strip wrap width in frames; `None` keeps one row
    pub columns: Option<u32>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            scale: 1,
            columns: None,
        }
    }
}

/// Serialize any export document to a JSON string.
pub fn to_json<T: Serialize + ?Sized>(document: &T, options: &ExportOptions) -> Result<String> {
    let json = if options.pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Write an export document to `path`, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(
    document: &T,
    path: &Path,
    options: &ExportOptions,
) -> Result<()> {
    let json = to_json(document, options)?;
    ensure_parent_dir(path)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    log::info!("wrote {}", path.display());
    Ok(())
}
