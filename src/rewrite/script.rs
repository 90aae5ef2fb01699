//! Rewriter for logic lines: whole `.js` files and the `<script>` section
//! of component files.

use std::path::Path;

use crate::patterns::{HAN_LITERAL, has_cjk};
use crate::session::ExtractSession;

use super::extract_template_interps;

/// How the lookup call is spelled at a rewritten call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callee {
    /// Free-function call on the imported module: `i18n.t(...)`.
    /// Used in standalone script files, which get the import prepended.
    Module,
    /// Member call on the enclosing component: `this.$t(...)`.
    /// Used in a component's script section, where `$t` is already bound.
    Member,
}

impl Callee {
    fn as_str(&self) -> &'static str {
        match self {
            Callee::Module => "i18n.t",
            Callee::Member => "this.$t",
        }
    }
}

/// Rewrites every line of `content`, replacing Han string literals with
/// lookup calls and recording the extracted text in the session.
///
/// Lines that look like comments or logging are skipped wholesale. This is
/// a per-line heuristic, not a lexer: a legitimate string containing `//`
/// is over-skipped, and a multi-line comment body without a `*` on the
/// line slips through.
pub fn rewrite_script_lines(
    session: &mut ExtractSession,
    file: &Path,
    content: &str,
    callee: Callee,
) -> String {
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| rewrite_line(session, file, line, callee))
        .collect();
    lines.join("\n")
}

fn rewrite_line(session: &mut ExtractSession, file: &Path, line: &str, callee: Callee) -> String {
    if line.contains("//") || line.contains('*') || line.contains("console.") {
        return line.to_string();
    }
    if !has_cjk(line) {
        return line.to_string();
    }

    HAN_LITERAL
        .replace_all(line, |caps: &regex::Captures| {
            let delimiter = &caps[1];
            let text = caps[2].trim();

            if delimiter != "`" {
                let key = session.lang_key(text, file);
                session.insert(&key, text);
                return format!("{}('{}')", callee.as_str(), key);
            }

            let (text, exprs) = extract_template_interps(text);
            let key = session.lang_key(&text, file);
            session.insert(&key, &text);
            if exprs.is_empty() {
                format!("{}('{}')", callee.as_str(), key)
            } else {
                format!("{}('{}', [{}])", callee.as_str(), key, exprs.join(","))
            }
        })
        .into_owned()
}
