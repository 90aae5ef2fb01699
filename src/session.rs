//! Run-scoped extraction state.
//!
//! All mutable state of one extraction run lives in [`ExtractSession`]:
//! the run-wide text→key cache, the accumulated language pack, and the
//! per-file key counter. Rewriters borrow the session mutably instead of
//! touching any global state.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// File name of the generated language pack.
pub const PACK_FILE_NAME: &str = "zh_cn.json";

/// State for one run of the extractor.
pub struct ExtractSession {
    input_root: PathBuf,
    i18n_path: String,
    output_dir: PathBuf,
    /// Run-wide cache: extracted text → assigned key. First file to see a
    /// text wins; later occurrences reuse its key.
    keys: HashMap<String, String>,
    /// Accumulated key → text mapping, in insertion order.
    pack: Map<String, Value>,
    /// Per-file key index, reset by the dispatcher before each file.
    counter: usize,
    /// Number of files rewritten so far.
    pub files_rewritten: usize,
}

impl ExtractSession {
    pub fn new(
        input_root: impl Into<PathBuf>,
        i18n_path: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_root: input_root.into(),
            i18n_path: i18n_path.into(),
            output_dir: output_dir.into(),
            keys: HashMap::new(),
            pack: Map::new(),
            counter: 0,
            files_rewritten: 0,
        }
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    /// Import path injected into rewritten script files.
    pub fn i18n_path(&self) -> &str {
        &self.i18n_path
    }

    /// Resets the per-file key index. Called once per dispatched file.
    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    /// Returns the key for `text`, assigning a new one on first sight.
    ///
    /// A cache hit returns the key assigned when the text was first seen
    /// anywhere in the run, without consuming an index. A miss derives the
    /// key from `file`'s path relative to the input root (separators and
    /// hyphens become underscores, the extension is stripped) plus the
    /// file's current index.
    pub fn lang_key(&mut self, text: &str, file: &Path) -> String {
        if let Some(key) = self.keys.get(text) {
            return key.clone();
        }
        let key = format!("{}_{}", self.key_prefix(file), self.counter);
        self.counter += 1;
        self.keys.insert(text.to_string(), key.clone());
        key
    }

    /// Records a key → text pair in the language pack.
    pub fn insert(&mut self, key: &str, text: &str) {
        self.pack
            .insert(key.to_string(), Value::String(text.to_string()));
    }

    pub fn key_count(&self) -> usize {
        self.pack.len()
    }

    /// Serializes the full accumulated pack to `<output>/zh_cn.json`,
    /// overwriting any previous write from this run.
    pub fn write_pack(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        let file = self.output_dir.join(PACK_FILE_NAME);
        let content = serde_json::to_string_pretty(&Value::Object(self.pack.clone()))
            .context("Failed to serialize language pack")?;
        fs::write(&file, format!("{}\n", content))
            .with_context(|| format!("Failed to write language pack: {}", file.display()))?;

        Ok(file)
    }

    fn key_prefix(&self, file: &Path) -> String {
        let relative = file.strip_prefix(&self.input_root).unwrap_or(file);
        let mut prefix: String = relative
            .to_string_lossy()
            .chars()
            .map(|c| match c {
                '/' | '\\' | '-' => '_',
                other => other,
            })
            .collect();
        // Strip everything from the first dot, like "foo.test.js" → "foo".
        if let Some(dot) = prefix.find('.') {
            prefix.truncate(dot);
        }
        prefix
    }
}
