//! Run configuration for the benchmark binary.
//!
//! ```toml
//! method = "baseline"
//! parallel = true
//! progress = false
//! output_suffix = "_processed"
//! ```
//!
//! Every key is optional. The file is read from `--config <path>`, or from
//! `<config dir>/el-mention/config.toml` when that exists. Command-line
//! flags override it. The matching threshold is not configurable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::matcher::MatcherKind;
use crate::Result;

/// Suffix appended to the dataset stem when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_processed";

/// Settings for a processing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Matcher to run.
    pub method: MatcherKind,
    /// Spread records over a thread pool.
    pub parallel: bool,
    /// Show a progress bar.
    pub progress: bool,
    /// Appended to the dataset file stem to name the default output.
    pub output_suffix: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            method: MatcherKind::Trigram,
            parallel: false,
            progress: false,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl RunConfig {
    /// Parse TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// `path` if given, else the user config file if present, else defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            log::debug!("loading config from {}", path.display());
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| crate::Error::config(e.to_string()))
    }

    /// Default output path for `dataset`: same directory, stem plus suffix, `.json`.
    #[must_use]
    pub fn output_path_for(&self, dataset: &Path) -> PathBuf {
        sibling_path(dataset, &self.output_suffix)
    }
}

/// `dir/<stem><suffix>.json` next to `path`.
#[must_use]
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    path.with_file_name(format!("{}{}.json", stem, suffix))
}

/// `<config dir>/el-mention/config.toml`, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut dir| {
        dir.push("el-mention");
        dir.push("config.toml");
        dir
    })
}
