//! Specmerge CLI - merge measurement CSVs with normalized sample trial data
//!
//! ```bash
//! specmerge                     # config.txt next to the executable
//! specmerge --base-dir ./lab    # config.txt in ./lab
//! ```
//!
//! Exit status is 1 when the config file is missing (with a
//! `Config file not found at: <path>` message) and non-zero on any other
//! propagated error.

use clap::Parser;
use specmerge::{pipeline, Config, ConfigError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "specmerge")]
#[command(about = "Merge spectroscopy measurement CSVs with normalized sample trial data", long_about = None)]
struct Args {
    /// Directory containing config.txt (default: the executable's directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let base_dir = args.base_dir.unwrap_or_else(default_base_dir);

    let config = match Config::load(&base_dir) {
        Ok(config) => config,
        Err(err @ ConfigError::NotFound { .. }) => {
            println!("{err}");
            return ExitCode::from(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(1);
        }
    };

    if let Err(err) = pipeline::run(&config) {
        eprintln!("Error: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Base directory when none is given: where the executable lives.
fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
