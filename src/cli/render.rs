//! Render command implementation

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::catalog::{SheetAnimation, SheetId};
use crate::config::{resolve_config, CliOverrides, OutputConfig};
use crate::export::{write_json, ExportOptions, SheetManifest};
use crate::gif::render_animation_gif;
use crate::output::{save_png, scale_image};
use crate::renderer::render_animation_strip;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Parsed arguments of `pxb render`
pub struct RenderArgs {
    pub sheet: Option<SheetId>,
    pub output: Option<PathBuf>,
    pub scale: Option<u32>,
    pub columns: Option<u32>,
    pub gif: bool,
    pub no_json: bool,
    pub config: Option<PathBuf>,
}

impl RenderArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dir: self.output.clone(),
            scale: self.scale,
            columns: self.columns,
            gif: self.gif.then_some(true),
            json: self.no_json.then_some(false),
        }
    }
}

/// Write one animation's strip (and GIF when enabled).
fn render_one(entry: &SheetAnimation, output: &OutputConfig) -> Result<(), String> {
    let strip = render_animation_strip(entry.animation, output.columns);
    let strip = scale_image(strip, output.scale);
    let png_path = entry.output_path(&output.dir, "png");
    save_png(&strip, &png_path)
        .map_err(|e| format!("Cannot write '{}': {}", png_path.display(), e))?;

    if output.gif {
        let gif_path = entry.output_path(&output.dir, "gif");
        render_animation_gif(entry.animation, output.scale, &gif_path)
            .map_err(|e| format!("Cannot write '{}': {}", gif_path.display(), e))?;
    }
    Ok(())
}

fn manifest_path(dir: &Path, sheet: SheetId) -> PathBuf {
    dir.join(format!("{}.json", sheet.name()))
}

/// Execute the render command
pub fn run_render(args: RenderArgs) -> ExitCode {
    let config = match resolve_config(args.config.as_deref(), &args.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    let output = &config.output;

    let sheets: Vec<SheetId> = match args.sheet {
        Some(sheet) => vec![sheet],
        None => SheetId::ALL.to_vec(),
    };
    let entries: Vec<SheetAnimation> = sheets.iter().flat_map(|s| s.animations()).collect();

    // Encoding is independent per animation; sheets themselves are shared statics
    let errors: Vec<String> = entries
        .par_iter()
        .filter_map(|entry| render_one(entry, output).err())
        .collect();

    let mut failed = !errors.is_empty();
    for error in &errors {
        eprintln!("Error: {}", error);
    }

    if output.json {
        let options = ExportOptions {
            pretty: true,
            scale: output.scale,
            columns: output.columns,
        };
        for &sheet in &sheets {
            let path = manifest_path(&output.dir, sheet);
            if let Err(e) = write_json(&SheetManifest::new(sheet, &options), &path, &options) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        return ExitCode::from(EXIT_ERROR);
    }
    log::info!(
        "rendered {} animations from {} sheets into {}",
        entries.len(),
        sheets.len(),
        output.dir.display()
    );
    ExitCode::from(EXIT_SUCCESS)
}
