use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::app::App;
use crate::config::Config;

mod app;
mod clipboard;
mod config;
mod page;
mod utils;

/// A live word counter for your terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Override the configuration directory
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::get(args.config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = App::new(config).run() {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
