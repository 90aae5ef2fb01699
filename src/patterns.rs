//! Heuristic patterns shared by the rewriters.
//!
//! The extraction engine is deliberately regex- and line-based rather than
//! a real parser for JS or Vue templates. The patterns below bound what the
//! tool is able to recognize; anything they miss passes through unchanged.

use std::sync::LazyLock;

use regex::Regex;

/// A quoted literal containing at least one Han character. The closing
/// delimiter is any quote character, not necessarily the opening one, and
/// the content may not span lines or contain quote characters itself.
pub static HAN_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(['"`])([^'"`\n]*[\u{4e00}-\u{9fa5}]+[^'"`\n]*)(['"`])"#).unwrap()
});

/// A `${expr}` interpolation inside a template literal.
pub static TEMPLATE_INTERP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^{}]+)\}").unwrap());

/// A `{{ expr }}` interpolation block in markup. Greedy, so on a line with
/// several blocks it spans from the first `{{` to the last `}}`.
pub static MUSTACHE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(.*)\}\}").unwrap());

/// An attribute run starting at a (possibly bound, possibly hyphenated)
/// attribute name and extending greedily to the last quote on the line.
pub static ATTR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(:?\w*|:?\w*-\w*)=["'].*["']"#).unwrap());

/// Element inner text, from the first `>` to the last `</` on the line.
pub static TAG_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(>)(.*)(</)").unwrap());

/// The markup section of a component file, first `<template` to last
/// `template>`.
pub static TEMPLATE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<template.*template>").unwrap());

/// The logic section of a component file, first `<script` to last
/// `script>`.
pub static SCRIPT_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*script>").unwrap());

/// Checks whether the text contains a character in the CJK Unified
/// Ideographs block or the CJK Compatibility Forms / halfwidth block.
///
/// This is the line-level "is there anything translatable here" test.
pub fn has_cjk(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{4e00}'..='\u{9fa5}' | '\u{fe30}'..='\u{ffa0}'))
}

/// Checks whether the text contains a CJK Unified Ideograph. Narrower than
/// [`has_cjk`]; used where the original tool required an actual Han
/// character rather than punctuation forms.
pub fn has_han(text: &str) -> bool {
    text.chars().any(|c| matches!(c, '\u{4e00}'..='\u{9fa5}'))
}
