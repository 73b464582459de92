//! Command-line interface implementation for kiln.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "Kiln: project scaffolding from official and community templates", long_about = None)]
pub struct Args {
    /// Name of the project to create; defaults to the selected template's name
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory under which the project directory is created
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Select a template by name instead of prompting interactively
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Overwrite an existing output directory without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
