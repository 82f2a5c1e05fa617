use std::path::{Path, PathBuf};

use anyhow::Result;
use dayplan_core::config::DayplanConfig;
use owo_colors::OwoColorize;

/// Settings to persist; `None` keeps the current value.
#[derive(Default)]
pub struct ConfigChanges {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
}

impl ConfigChanges {
    fn is_empty(&self) -> bool {
        self.data_dir.is_none() && self.storage_key.is_none()
    }
}

pub fn run(mut config: DayplanConfig, config_path: &Path, changes: ConfigChanges) -> Result<()> {
    if !changes.is_empty() {
        if let Some(data_dir) = changes.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(storage_key) = changes.storage_key {
            config.storage_key = storage_key;
        }

        config.save_to(config_path)?;
        println!("{} {}", "  Saved".green(), config_path.display());
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Data:       {}", config.data_path().display());
    println!(
        "  Snapshot:   {}",
        config.gateway().path_for(&config.storage_key).display()
    );

    Ok(())
}
