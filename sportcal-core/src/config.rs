//! sportcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{SportCalError, SportCalResult};
use crate::seed::RawSeed;
use crate::storage::FileStorage;

static DEFAULT_DATA_DIR: &str = "~/.local/share/sportcal";
const DEFAULT_MAX_EVENTS_PER_CELL: usize = 3;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_max_events_per_cell() -> usize {
    DEFAULT_MAX_EVENTS_PER_CELL
}

/// Global configuration at ~/.config/sportcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SportCalConfig {
    /// Where the event snapshot is kept
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Seed file to use instead of the bundled dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// How many events a month-grid cell shows before "+N"
    #[serde(default = "default_max_events_per_cell")]
    pub max_events_per_cell: usize,
}

impl Default for SportCalConfig {
    fn default() -> Self {
        SportCalConfig {
            data_dir: default_data_dir(),
            seed_file: None,
            max_events_per_cell: DEFAULT_MAX_EVENTS_PER_CELL,
        }
    }
}

impl SportCalConfig {
    pub fn config_path() -> SportCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SportCalError::Config("Could not determine config directory".into()))?
            .join("sportcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default first if
    /// none exists yet.
    pub fn load() -> SportCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> SportCalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| SportCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SportCalError::Config(e.to_string()))
    }

    /// Save the current config to ~/.config/sportcal/config.toml
    pub fn save(&self) -> SportCalResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> SportCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SportCalError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SportCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| SportCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }

    /// The configured seed file, or the bundled dataset.
    pub fn seed(&self) -> SportCalResult<RawSeed> {
        match &self.seed_file {
            Some(path) => RawSeed::load(&expand(path)),
            None => RawSeed::bundled(),
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SportCalResult<()> {
        let contents = format!(
            "\
# sportcal configuration

# Where saved events live:
# data_dir = \"{}\"

# Seed dataset used on first run and on reset (defaults to the bundled one):
# seed_file = \"~/sports/seed.json\"

# Events shown per day in the month view before \"+N\":
# max_events_per_cell = {}
",
            DEFAULT_DATA_DIR, DEFAULT_MAX_EVENTS_PER_CELL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SportCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SportCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
