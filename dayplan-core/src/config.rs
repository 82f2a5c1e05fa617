//! Global dayplan configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{DayplanError, DayplanResult};
use crate::gateway::FileGateway;
use crate::store::DEFAULT_STORAGE_KEY;

static DEFAULT_DATA_DIR: &str = "~/.dayplan";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Configuration at ~/.config/dayplan/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DayplanConfig {
    /// Where snapshots are written. `~` is expanded.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name of the snapshot inside `data_dir`.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for DayplanConfig {
    fn default() -> Self {
        DayplanConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
        }
    }
}

impl DayplanConfig {
    pub fn config_path() -> DayplanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayplanError::Config("Could not determine config directory".into()))?
            .join("dayplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from the default location, creating a commented
    /// template there on first run.
    pub fn load() -> DayplanResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> DayplanResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| DayplanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayplanError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn gateway(&self) -> FileGateway {
        FileGateway::new(self.data_path())
    }

    /// Write these settings to `path`, replacing the file.
    pub fn save_to(&self, path: &Path) -> DayplanResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DayplanError::Config(e.to_string()))?;

        write_config_file(path, &content)
    }

    /// First-run template: every setting present but commented out, so the
    /// defaults apply until the user opts in.
    pub fn create_default_config(path: &Path) -> DayplanResult<()> {
        let template = format!(
            "\
# dayplan settings. Uncomment a line to override its default.

# Directory holding the event snapshot:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Snapshot name; events are kept in <data_dir>/<storage_key>.json
# storage_key = \"{DEFAULT_STORAGE_KEY}\"
"
        );

        write_config_file(path, &template)
    }
}

fn write_config_file(path: &Path, content: &str) -> DayplanResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            DayplanError::Config(format!("Cannot create {}: {e}", parent.display()))
        })?;
    }

    std::fs::write(path, content)
        .map_err(|e| DayplanError::Config(format!("Cannot write {}: {e}", path.display())))
}
