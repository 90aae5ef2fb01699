//! Rewriter for element inner text on markup lines.

use std::path::Path;

use crate::patterns::{HAN_LITERAL, MUSTACHE, TAG_TEXT, has_han};
use crate::session::ExtractSession;

use super::extract_mustache_interps;

/// Rewrites Han tag text on one markup line into `{{ $t(...) }}` blocks.
///
/// Three passes, mirroring the contexts inner text can appear in:
/// 1. literals inside an existing `{{ ... }}` block become lookup calls
///    directly, no new block needed;
/// 2. `>text</` inner text is wrapped in a new block, with any `{{ ... }}`
///    already present extracted into positional placeholders;
/// 3. a whole-line fallback catches text outside any `>...<` boundary.
pub fn replace_tag(session: &mut ExtractSession, file: &Path, line: &str) -> String {
    let mut text = MUSTACHE
        .replace_all(line, |caps: &regex::Captures| {
            HAN_LITERAL
                .replace_all(&caps[0], |inner: &regex::Captures| {
                    let literal = &inner[2];
                    let key = session.lang_key(literal, file);
                    session.insert(&key, literal);
                    format!("$t('{}')", key)
                })
                .into_owned()
        })
        .into_owned();

    text = TAG_TEXT
        .replace(&text, |caps: &regex::Captures| {
            let inner = &caps[2];
            if has_han(inner) {
                format!(">{}</", mustache_wrap(session, file, inner))
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    // Root-level text never crosses a `>...<` boundary; wrap the whole line.
    if has_han(&text) {
        text = mustache_wrap(session, file, &text);
    }

    text
}

/// Wraps `text` in a `{{ $t(...) }}` block, extracting any `{{ ... }}`
/// already present into positional placeholders passed as arguments.
fn mustache_wrap(session: &mut ExtractSession, file: &Path, text: &str) -> String {
    if MUSTACHE.is_match(text) {
        let (text, exprs) = extract_mustache_interps(text);
        let key = session.lang_key(&text, file);
        session.insert(&key, &text);
        if exprs.is_empty() {
            format!("{{{{$t('{}')}}}}", key)
        } else {
            format!("{{{{$t('{}', [{}])}}}}", key, exprs.join(","))
        }
    } else {
        let key = session.lang_key(text, file);
        session.insert(&key, text);
        format!("{{{{$t('{}')}}}}", key)
    }
}
