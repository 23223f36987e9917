use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::locale::Locale;

/// Settings for host tooling that previews the widget outside the OS.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Locale tag used when the store has no `selected_language`, e.g. "uk".
    pub default_locale: Option<String>,

    /// JSON dump of the shared widget store.
    pub store_path: Option<PathBuf>,
}

impl Config {
    pub fn locale(&self) -> Locale {
        self.default_locale
            .as_deref()
            .map(Locale::from_code)
            .unwrap_or_default()
    }

    pub fn set_default_locale(&mut self, locale: Locale) {
        self.default_locale = Some(locale.code().to_string());
    }

    pub fn store_path(&self) -> Result<&Path> {
        self.store_path.as_deref().ok_or_else(|| {
            anyhow!(
                "No store path configured.\n\
                 Hint: run `weatherfit configure` or pass `--store <path>`."
            )
        })
    }

    pub fn set_store_path(&mut self, path: PathBuf) {
        self.store_path = Some(path);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherfit", "weatherfit-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
