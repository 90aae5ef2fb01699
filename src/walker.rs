//! Tree traversal and language-pack flushing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::dispatch::process_file;
use crate::session::ExtractSession;

/// Walks the session's input root and rewrites every recognized file.
///
/// The immediate entries of the input root are visited in directory order;
/// a directory entry is recursed fully before the next entry starts. After
/// each top-level entry the whole accumulated pack is flushed to disk, so
/// a run interrupted partway leaves a pack covering exactly the entries
/// finished so far; the final flush is the complete one.
pub fn process_tree(
    session: &mut ExtractSession,
    ignores: &[Pattern],
    verbose: bool,
) -> Result<()> {
    let root = session.input_root().to_path_buf();
    let entries = fs::read_dir(&root)
        .with_context(|| format!("Failed to read input directory: {}", root.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in: {}", root.display()))?;
        let path = entry.path();

        if is_ignored(&root, &path, ignores) {
            if verbose {
                eprintln!("{} {}", "skipping".yellow(), path.display());
            }
            continue;
        }

        if path.is_dir() {
            for child in WalkDir::new(&path) {
                let child = child
                    .with_context(|| format!("Failed to walk directory: {}", path.display()))?;
                if !child.file_type().is_file() {
                    continue;
                }
                if is_ignored(&root, child.path(), ignores) {
                    if verbose {
                        eprintln!("{} {}", "skipping".yellow(), child.path().display());
                    }
                    continue;
                }
                process_file(session, child.path())?;
            }
        } else {
            process_file(session, &path)?;
        }

        let pack_file = session.write_pack()?;
        println!(
            "{}",
            format!("✔ language pack written to {}", pack_file.display()).green()
        );
    }

    Ok(())
}

/// Matches a path against the configured ignore globs, using the path
/// relative to the input root.
fn is_ignored(root: &Path, path: &Path, ignores: &[Pattern]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = relative.to_string_lossy();
    ignores.iter().any(|pattern| pattern.matches(&relative))
}
