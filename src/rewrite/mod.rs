//! Line rewriters for the three syntactic contexts a source file presents:
//! script statements, markup attributes, and markup tag text.

mod attr;
mod script;
mod tag;

pub use attr::replace_attr;
pub use script::{Callee, rewrite_script_lines};
pub use tag::replace_tag;

use crate::patterns::{MUSTACHE, TEMPLATE_INTERP};

/// Replaces every `${expr}` in `text` with a positional `{N}` placeholder
/// and returns the substituted text plus the expression bodies in order.
fn extract_template_interps(text: &str) -> (String, Vec<String>) {
    let mut exprs = Vec::new();
    let substituted = TEMPLATE_INTERP
        .replace_all(text, |caps: &regex::Captures| {
            exprs.push(caps[1].to_string());
            format!("{{{}}}", exprs.len() - 1)
        })
        .into_owned();
    (substituted, exprs)
}

/// Replaces `{{ expr }}` blocks in `text` with positional `{N}` placeholders
/// and returns the substituted text plus the block bodies in order. The
/// block pattern is greedy, so several blocks on one line collapse into a
/// single placeholder spanning first `{{` to last `}}`.
fn extract_mustache_interps(text: &str) -> (String, Vec<String>) {
    let mut exprs = Vec::new();
    let substituted = MUSTACHE
        .replace_all(text, |caps: &regex::Captures| {
            exprs.push(caps[1].to_string());
            format!("{{{}}}", exprs.len() - 1)
        })
        .into_owned();
    (substituted, exprs)
}
