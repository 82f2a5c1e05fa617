//! Persistence gateway: a get/set key-value byte store.
//!
//! The event store reads one snapshot at startup and writes one after each
//! change. Where the bytes end up is up to the implementation.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::DayplanResult;

pub trait PersistenceGateway {
    /// Read the bytes stored under `key`, `None` if nothing is stored.
    fn load(&self, key: &str) -> DayplanResult<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing what was there.
    fn save(&mut self, key: &str, bytes: &[u8]) -> DayplanResult<()>;
}

// =============================================================================
// In-memory gateway
// =============================================================================

/// Keeps everything in a map. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryGateway {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway pre-seeded with one entry.
    pub fn with_entry(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let mut gateway = Self::new();
        gateway.entries.insert(key.to_string(), bytes.into());
        gateway
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self, key: &str) -> DayplanResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> DayplanResult<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

// =============================================================================
// File gateway
// =============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileGateway {
    dir: PathBuf,
}

impl FileGateway {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileGateway { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&self, key: &str) -> DayplanResult<Option<Vec<u8>>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read(&path)?))
    }

    /// Write to a temp file, then rename over the target so a crash never
    /// leaves a half-written snapshot behind.
    fn save(&mut self, key: &str, bytes: &[u8]) -> DayplanResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));

        std::fs::write(&temp, bytes)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
