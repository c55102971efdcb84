//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod export;
mod list;
mod render;
mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::animation::Action;
use crate::catalog::SheetId;
use crate::config::MAX_SCALE;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixelbrawl - generate fighting-game sprite sheets
#[derive(Parser)]
#[command(name = "pxb")]
#[command(about = "Pixelbrawl - generate fighting-game sprite sheets and render them to PNG")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every sheet with its animations, frame counts and timings
    List,

    /// Render sprite strips to PNG (plus optional GIF previews and JSON manifests)
    Render {
        /// Only render the sheet with this name
        #[arg(short, long)]
        sheet: Option<SheetId>,

        /// Output directory (default: build/sprites)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale output by integer factor (1-16)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64))]
        scale: Option<u32>,

        /// Wrap strips after this many frames
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        columns: Option<u32>,

        /// Also write looping GIF previews
        #[arg(long)]
        gif: bool,

        /// Skip the JSON manifests
        #[arg(long)]
        no_json: bool,

        /// Use this config file instead of searching for pixelbrawl.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print one frame to the terminal
    Show {
        /// Sheet name (brawler, duelist, chakra_sphere, ...)
        sheet: SheetId,

        /// Action for character sheets (default: idle)
        action: Option<Action>,

        /// Frame index within the animation
        #[arg(short, long, default_value = "0")]
        frame: usize,

        /// Flip the frame horizontally (facing left)
        #[arg(long)]
        mirror: bool,

        /// Use this config file instead of searching for pixelbrawl.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a sheet's raw frames as JSON
    Export {
        /// Sheet name
        sheet: SheetId,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => list::run_list(),
        Commands::Render {
            sheet,
            output,
            scale,
            columns,
            gif,
            no_json,
            config,
        } => render::run_render(render::RenderArgs {
            sheet,
            output,
            scale,
            columns,
            gif,
            no_json,
            config,
        }),
        Commands::Show {
            sheet,
            action,
            frame,
            mirror,
            config,
        } => show::run_show(sheet, action, frame, mirror, config.as_deref()),
        Commands::Export {
            sheet,
            output,
            compact,
        } => export::run_export(sheet, output.as_deref(), compact),
    }
}
