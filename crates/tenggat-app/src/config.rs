use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use tenggat_store::{DEFAULT_KEY, validate_key};

const APP_DIR: &str = "tenggat";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_MESSAGE_TTL_SECS: u64 = 5;

/// Top-level configuration loaded from `<config dir>/tenggat/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Where and under which key tasks are stored.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Terminal UI preferences.
    #[serde(default)]
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Location of the per-user configuration file, if the platform has one.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the file at `path`, or the per-user file when `path` is `None`.
    ///
    /// An explicit path must exist; the per-user file may be absent, in which
    /// case defaults apply.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read, parsed, or validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    bail!("config file {} does not exist", path.display());
                }
                Self::from_path(path)
            }
            None => Self::default_path().map_or_else(|| Ok(Self::default()), |path| Self::from_path(&path)),
        }
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read, parsed, or validated.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    /// Returns an error on malformed TOML or invalid values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validate_key(&self.storage.key).context("storage.key must only use [A-Za-z0-9_-]")?;
        if self.tui.message_ttl_secs == 0 {
            bail!("tui.message_ttl_secs must be greater than zero");
        }
        Ok(())
    }
}

/// `[storage]` block.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the blobs. Defaults to `<data dir>/tenggat`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Key of the task blob.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Directory to open, preferring `override_dir`, then the configured one,
    /// then the platform data directory.
    ///
    /// # Errors
    /// Returns an error when no directory is configured and the platform has no data directory.
    pub fn resolve_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .ok_or_else(|| anyhow!("failed to resolve a data directory; pass --data-dir"))
    }
}

/// `[tui]` block.
#[derive(Debug, Clone, Deserialize)]
pub struct TuiConfig {
    /// Seconds a status message stays visible.
    #[serde(default = "default_message_ttl")]
    pub message_ttl_secs: u64,
    /// Show the month calendar beside the list.
    #[serde(default = "default_true")]
    pub show_calendar: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            message_ttl_secs: DEFAULT_MESSAGE_TTL_SECS,
            show_calendar: true,
        }
    }
}

fn default_key() -> String {
    DEFAULT_KEY.to_owned()
}

const fn default_message_ttl() -> u64 {
    DEFAULT_MESSAGE_TTL_SECS
}

const fn default_true() -> bool {
    true
}
