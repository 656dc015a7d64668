//! Configuration loading and profile editing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

use crate::error::StoreError;
use crate::file::JsonFileStore;
use crate::traits::DEFAULT_HISTORY_LIMIT;

/// Config file looked up in the current directory.
pub const CONFIG_FILE: &str = "sprint.toml";

/// Top-level maths-sprint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintConfig {
    /// Name shown on the profile and summaries.
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// Where quiz history is stored.
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    /// Number of quizzes kept in the history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Default lower bound for operands.
    #[serde(default = "default_min")]
    pub default_min: i64,
    /// Default upper bound for operands.
    #[serde(default = "default_max")]
    pub default_max: i64,
    /// Default number of questions per quiz.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
}

fn default_user_name() -> String {
    "Math Sprinter".to_string()
}
fn default_results_path() -> PathBuf {
    PathBuf::from("./maths-sprint-data/results.json")
}
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
fn default_min() -> i64 {
    1
}
fn default_max() -> i64 {
    100
}
fn default_question_count() -> usize {
    10
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            results_path: default_results_path(),
            history_limit: default_history_limit(),
            default_min: default_min(),
            default_max: default_max(),
            default_question_count: default_question_count(),
        }
    }
}

impl SprintConfig {
    /// Open the result store this config points at.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.results_path).with_history_limit(self.history_limit)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.history_limit >= 1, "history_limit must be at least 1");
        anyhow::ensure!(
            self.default_min <= self.default_max,
            "default_min ({}) must not exceed default_max ({})",
            self.default_min,
            self.default_max
        );
        anyhow::ensure!(
            self.default_question_count >= 1,
            "default_question_count must be at least 1"
        );
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `sprint.toml` in the current directory
/// 2. `~/.config/maths-sprint/config.toml`
///
/// Environment variable overrides: `MATHS_SPRINT_RESULTS`, `MATHS_SPRINT_USER`.
pub fn load_config() -> Result<SprintConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SprintConfig> {
    let mut config = match resolve_config_path(path)? {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SprintConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SprintConfig::default(),
    };

    if let Ok(results) = std::env::var("MATHS_SPRINT_RESULTS") {
        if !results.trim().is_empty() {
            config.results_path = PathBuf::from(results);
        }
    }
    if let Ok(user) = std::env::var("MATHS_SPRINT_USER") {
        if !user.trim().is_empty() {
            config.user_name = user.trim().to_string();
        }
    }

    config.validate()?;
    Ok(config)
}

/// The file `load_config_from` would read, if any.
pub fn resolve_config_path(path: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(p) = path {
        if p.exists() {
            return Ok(Some(p.to_path_buf()));
        }
        anyhow::bail!("config file not found: {}", p.display());
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Ok(Some(local));
    }
    Ok(dirs_path()
        .map(|dir| dir.join("config.toml"))
        .filter(|global| global.exists()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("maths-sprint"))
}

/// Set `user_name` in the config file at `path`, keeping its comments and
/// layout. The file is created if it does not exist.
pub fn set_user_name(path: &Path, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::InvalidProfileName(name.to_string()).into());
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read config: {}", path.display()))
        }
    };
    let mut doc = content
        .parse::<DocumentMut>()
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    doc["user_name"] = toml_edit::value(name);

    std::fs::write(path, doc.to_string())
        .with_context(|| format!("failed to write config: {}", path.display()))?;
    tracing::info!(path = %path.display(), "profile name updated");
    Ok(())
}
