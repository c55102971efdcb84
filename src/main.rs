//! pxb - command-line tool for generating fighting-game sprite sheets

use std::process::ExitCode;

use pixelbrawl::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run()
}
