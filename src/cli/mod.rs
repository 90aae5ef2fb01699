use std::env;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::config::{Config, find_config_file, load_config};
use crate::session::ExtractSession;
use crate::walker::process_tree;

mod args;
mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Runs one extraction over the tree named by `-f/--file`.
///
/// Defaults for the i18n import path and the output directory come from a
/// `.hankeyrc.json` found upward from the working directory, if any; flags
/// override config values.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(input) = args.file else {
        eprintln!(
            "{}",
            "🙅 extraction aborted: missing input directory (-f/--file)".red()
        );
        return Ok(ExitStatus::Error);
    };

    let config = match find_config_file(&env::current_dir()?) {
        Some(path) => {
            let config = load_config(&path)?;
            if args.verbose {
                eprintln!("using config file {}", path.display());
            }
            config
        }
        None => Config::default(),
    };
    config.validate()?;

    let i18n_path = args.i18n.unwrap_or_else(|| config.i18n_path.clone());
    let output_dir = args
        .directory
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    println!(
        "{}",
        format!(
            "input directory: {}\ni18n import path: {}\nlanguage pack directory: {}",
            input.display(),
            i18n_path,
            output_dir.display()
        )
        .green()
    );

    let ignores = config.ignore_patterns();
    let mut session = ExtractSession::new(input, i18n_path, output_dir);
    process_tree(&mut session, &ignores, args.verbose)?;

    println!(
        "{}",
        format!(
            "✔ done: {} files rewritten, {} keys extracted",
            session.files_rewritten,
            session.key_count()
        )
        .green()
    );

    Ok(ExitStatus::Success)
}
