//! Show command implementation (terminal display)

use std::path::Path;
use std::process::ExitCode;

use crate::animation::Action;
use crate::catalog::SheetId;
use crate::config::load_config;
use crate::frame::Frame;
use crate::terminal::render_frame;
use crate::transforms::mirror_horizontal;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Pick the requested frame, mirrored when asked.
pub(crate) fn select_frame(
    sheet: SheetId,
    action: Option<Action>,
    index: usize,
    mirror: bool,
) -> Result<Frame, String> {
    let entry = sheet.animation(action)?;
    let frames = entry.animation.frames();
    let frame = frames.get(index).ok_or_else(|| {
        format!(
            "'{}' {} has {} frames, no frame {}",
            sheet,
            entry.label(),
            frames.len(),
            index
        )
    })?;
    Ok(if mirror {
        mirror_horizontal(frame)
    } else {
        frame.clone()
    })
}

/// Execute the show command - display one frame with colored terminal output
pub fn run_show(
    sheet: SheetId,
    action: Option<Action>,
    frame_index: usize,
    mirror: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let frame = match select_frame(sheet, action, frame_index, mirror) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    print!("{}", render_frame(&frame, config.preview.glyph()));
    ExitCode::from(EXIT_SUCCESS)
}
