//! Export command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::catalog::SheetId;
use crate::export::{frames_json, write_json, ExportOptions, FramesDocument};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the export command
pub fn run_export(sheet: SheetId, output: Option<&Path>, compact: bool) -> ExitCode {
    let options = ExportOptions {
        pretty: !compact,
        ..Default::default()
    };

    let result = match output {
        Some(path) => write_json(&FramesDocument::new(sheet), path, &options),
        None => frames_json(sheet, &options).map(|json| println!("{}", json)),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
