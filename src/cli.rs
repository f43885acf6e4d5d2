//! Command-line interface implementation for autocodegen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for the acg binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "autocodegen: regenerate project trees from layered templates", long_about = None)]
pub struct Args {
    /// Directory to start workspace discovery from (defaults to the
    /// current directory)
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Force an initializing run: one-shot generators and rename markers
    /// become eligible again
    #[arg(long)]
    pub init: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
