//! Per-file routing: detect the file kind, slice component sections, run
//! the rewriters, write the result back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::patterns::{SCRIPT_SECTION, TEMPLATE_SECTION, has_cjk, has_han};
use crate::rewrite::{Callee, replace_attr, replace_tag, rewrite_script_lines};
use crate::session::ExtractSession;

/// What a file's extension says about how to rewrite it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Standalone script file, rewritten whole with an import prepended.
    Script,
    /// Component file with markup, logic and style sections.
    Component,
}

/// Classifies a path by extension. Anything that is not `.js` or `.vue`
/// is out of scope and never opened.
pub fn detect_kind(path: &Path) -> Option<FileKind> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("js") {
        Some(FileKind::Script)
    } else if ext.eq_ignore_ascii_case("vue") {
        Some(FileKind::Component)
    } else {
        None
    }
}

/// Rewrites one file in place. Files of unknown kind are left untouched.
///
/// The per-file key index is reset before processing, and the file is
/// written back even when nothing matched.
pub fn process_file(session: &mut ExtractSession, path: &Path) -> Result<()> {
    let Some(kind) = detect_kind(path) else {
        return Ok(());
    };

    session.reset_counter();
    println!("{}", format!("➤ rewriting {}", path.display()).blue());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let rewritten = match kind {
        FileKind::Script => rewrite_script_file(session, path, &content),
        FileKind::Component => rewrite_component_file(session, path, &content),
    };
    fs::write(path, rewritten)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    session.files_rewritten += 1;
    println!("{}", format!("✔ rewrote {}", path.display()).green());
    Ok(())
}

/// A script file gets the lookup-module import prepended, then every line
/// rewritten with the free-function callee.
fn rewrite_script_file(session: &mut ExtractSession, path: &Path, content: &str) -> String {
    let content = format!("import i18n from '{}'\n{}", session.i18n_path(), content);
    rewrite_script_lines(session, path, &content, Callee::Module)
}

/// A component file is rewritten section by section: attribute and tag
/// rewriters over the markup section, the script rewriter with the member
/// callee over the logic section. Style and any other sections pass
/// through untouched.
fn rewrite_component_file(session: &mut ExtractSession, path: &Path, content: &str) -> String {
    let content = TEMPLATE_SECTION
        .replace(content, |caps: &regex::Captures| {
            let lines: Vec<String> = caps[0]
                .split('\n')
                .map(|line| {
                    if !has_cjk(line) {
                        return line.to_string();
                    }
                    let line = replace_attr(session, path, line);
                    if has_han(&line) {
                        replace_tag(session, path, &line)
                    } else {
                        line
                    }
                })
                .collect();
            lines.join("\n")
        })
        .into_owned();

    SCRIPT_SECTION
        .replace(&content, |caps: &regex::Captures| {
            rewrite_script_lines(session, path, &caps[0], Callee::Member)
        })
        .into_owned()
}
