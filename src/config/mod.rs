use crate::core::entries::EntryList;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::view_mode::ViewMode;
use crate::utils::path::{ensure_parent_dir, expand_tilde};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_end_time")]
    pub end_time: String,
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_entries")]
    pub default_entries: Vec<Entry>,
}

fn default_end_time() -> String {
    "22:00".to_string()
}

fn default_entries() -> Vec<Entry> {
    EntryList::seeded().entries().to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            end_time: default_end_time(),
            default_view: ViewMode::default(),
            default_entries: default_entries(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rindirect")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rindirect")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rindirect.conf")
    }

    /// `--config` override when given, the platform default otherwise.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is a valid, all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Write the configuration to `path`, creating the directory if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = self.to_yaml()?;
        ensure_parent_dir(path).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml)
            .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Entries to start a plan with, normalized like user input.
    pub fn seed_entries(&self) -> EntryList {
        self.default_entries
            .iter()
            .map(|e| Entry::new(&e.label, &e.duration))
            .collect::<Vec<_>>()
            .into()
    }
}
