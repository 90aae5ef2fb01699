use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".hankeyrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for paths to leave untouched, relative to the input
    /// directory.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Import path for the lookup module prepended to script files.
    #[serde(default = "default_i18n_path")]
    pub i18n_path: String,
    /// Directory the language pack is written to.
    #[serde(default = "default_output_dir", alias = "outputDirectory")]
    pub output_dir: String,
}

fn default_i18n_path() -> String {
    "@/locales".to_string()
}

fn default_output_dir() -> String {
    "@/locales/modules".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            i18n_path: default_i18n_path(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Compiles the ignore patterns; call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

/// Searches for a config file upward from `start_dir`, stopping at the
/// first directory containing `.git`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}
