//! Rewriter for quoted attribute values on markup lines.

use std::path::Path;

use crate::patterns::{ATTR_RUN, HAN_LITERAL};
use crate::session::ExtractSession;

use super::extract_template_interps;

/// Rewrites Han text inside quoted attribute values on one markup line.
///
/// The attribute pattern is greedy, so one match can span several
/// attributes; the run is split back into `name=value` tokens before each
/// is rewritten. An attribute whose value becomes a lookup call gets the
/// `:` binding prefix so the templating engine evaluates it, unless the
/// name already carries one.
pub fn replace_attr(session: &mut ExtractSession, file: &Path, line: &str) -> String {
    ATTR_RUN
        .replace(line, |caps: &regex::Captures| {
            let tokens = split_attr_run(&caps[0]);
            let rewritten: Vec<String> = tokens
                .iter()
                .map(|token| rewrite_token(session, file, token))
                .collect();
            rewritten.join(" ")
        })
        .into_owned()
}

/// Splits a matched attribute run on spaces into `name=value` tokens,
/// folding fragments without `=` (a quoted value containing spaces) back
/// into the preceding token.
fn split_attr_run(run: &str) -> Vec<String> {
    let parts: Vec<&str> = run.split(' ').collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for (i, part) in parts.iter().enumerate() {
        if part.contains('=') {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current = part.to_string();
        } else {
            current.push(' ');
            current.push_str(part);
        }
        if i + 1 == parts.len() {
            tokens.push(current.clone());
        }
    }
    tokens
}

fn rewrite_token(session: &mut ExtractSession, file: &Path, token: &str) -> String {
    let mut rewritten = HAN_LITERAL
        .replace_all(token, |caps: &regex::Captures| {
            let delimiter = &caps[1];
            let text = &caps[2];

            if delimiter == "`" {
                let (text, exprs) = extract_template_interps(text);
                let key = session.lang_key(&text, file);
                session.insert(&key, &text);
                if exprs.is_empty() {
                    return format!("$t('{}')", key);
                }
                return format!("$t('{}', [{}])", key, exprs.join(","));
            }

            let key = session.lang_key(text, file);
            session.insert(&key, text);
            if token.contains(':') {
                // Already a bound attribute, the value is an expression.
                format!("$t('{}')", key)
            } else {
                format!("\"$t('{}')\"", key)
            }
        })
        .into_owned();

    if !rewritten.contains(':') && rewritten.contains("$t") {
        rewritten = format!(":{}", rewritten);
    }
    rewritten
}
