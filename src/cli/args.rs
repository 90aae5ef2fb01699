//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for .vue/.js files (required)
    #[arg(short = 'f', long = "file", value_name = "DIR")]
    pub file: Option<PathBuf>,

    /// Import path for the i18n module prepended to .js files
    #[arg(short = 'i', long = "i18n", value_name = "PATH")]
    pub i18n: Option<String>,

    /// Output directory for the generated language pack
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
