use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_GITHUB_USER, GITHUB_API_BASE};
use crate::models::{ListVariant, Profile};

/// User configuration, read from `~/.folio/config.yaml`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github_user: String,
    /// Full listing address; overrides the one derived from `github_user`
    pub address: Option<String>,
    pub variant: ListVariant,
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            github_user: String::from(DEFAULT_GITHUB_USER),
            address: None,
            variant: ListVariant::All,
            profile: Profile::default(),
        }
    }
}

impl Config {
    /// Default config location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_or_default(&Self::default_path())
    }

    /// Load from `path`. A missing or malformed file yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Address the repository list is fetched from
    pub fn address(&self) -> String {
        match &self.address {
            Some(address) => address.clone(),
            None => format!("{}/users/{}/repos", GITHUB_API_BASE, self.github_user),
        }
    }
}
