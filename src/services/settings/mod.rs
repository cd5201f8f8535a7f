// Settings service
// TOML persistence for grid settings under the platform config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::GridSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`GridSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    /// Service backed by the platform config directory.
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "daygrid")
            .ok_or_else(|| anyhow!("No valid home directory for config storage"))?;
        Ok(Self {
            path: dirs.config_dir().join(SETTINGS_FILE),
        })
    }

    /// Service backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load settings, falling back to defaults on any error. A missing file
    /// is the normal first-run case and is not logged.
    pub fn load(&self) -> GridSettings {
        if !self.path.exists() {
            return GridSettings::default();
        }
        match self.try_load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "Failed to load settings from {:?}, using defaults: {:#}",
                    self.path,
                    err
                );
                GridSettings::default()
            }
        }
    }

    fn try_load(&self) -> Result<GridSettings> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;
        let settings: GridSettings =
            toml::from_str(&text).context("Failed to parse settings file")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    /// Validate and write settings.
    pub fn save(&self, settings: &GridSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))?;
        Ok(())
    }
}
