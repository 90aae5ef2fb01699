//! Hankey - hardcoded-Chinese-text extractor for Vue/JS projects
//!
//! Hankey scans a source tree of `.js` and `.vue` files, replaces literal
//! Chinese text in place with i18n lookup calls keyed by generated
//! identifiers, and emits a key→text language pack (`zh_cn.json`). It is a
//! migration aid: the matching is heuristic (regex- and line-based), not a
//! parser for JS or Vue templates.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `dispatch`: Per-file routing and component-section slicing
//! - `patterns`: Shared heuristic regexes and CJK predicates
//! - `rewrite`: The line rewriters (script, attribute, tag text)
//! - `session`: Run-scoped state (key cache, language pack)
//! - `walker`: Directory traversal and pack flushing

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod patterns;
pub mod rewrite;
pub mod session;
pub mod walker;
