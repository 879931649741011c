//! Editor settings, stored as JSON in the platform config directory.
//!
//! Every field has a default, so a missing or partial file is fine.

use crate::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_PREVIEW_CACHE_PARAM, DEFAULT_USER_AGENT, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tracing filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    pub sync: SyncSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            sync: SyncSettings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Drop completions of requests superseded by a newer one
    pub discard_stale_responses: bool,
    pub user_agent: String,
    /// Query parameter used to defeat the preview cache
    pub preview_cache_param: String,
    /// Per-request timeout. `None` waits forever.
    pub request_timeout_secs: Option<u64>,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            discard_stale_responses: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            preview_cache_param: DEFAULT_PREVIEW_CACHE_PARAM.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// `<config dir>/derivative-editor/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Write the settings, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = default_settings_path().context("No config directory on this platform")?;
        self.save_to(&path)
    }
}
