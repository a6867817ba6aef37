//! Data directory storage
//!
//! Directory structure:
//! ~/.grocer/
//!   config.yaml          # Settings
//!   lists.yaml           # All shopping lists
//!   grocer.log           # Log output

use std::fs;
use std::path::{Path, PathBuf};

use grocer_core::{Snapshot, SnapshotError};

use super::settings::Settings;
use crate::util::io::atomic_write;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<SnapshotError> for StorageError {
    fn from(e: SnapshotError) -> Self {
        match e {
            SnapshotError::Serialize(_) => StorageError::Serialize(e.to_string()),
            _ => StorageError::Parse(e.to_string()),
        }
    }
}

/// Manages the files in the data directory
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.grocer/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".grocer")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn lists_path(&self) -> PathBuf {
        self.root.join("lists.yaml")
    }

    /// Whether a settings file exists yet
    pub fn has_settings(&self) -> bool {
        self.config_path().exists()
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load settings, falling back to defaults when no file exists
    pub fn load_settings(&self) -> Result<Settings, StorageError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        self.init()?;
        let yaml = serde_saphyr::to_string(settings)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        atomic_write(&self.config_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Load saved lists. `None` means nothing has been saved yet.
    pub fn load_lists(&self) -> Result<Option<Snapshot>, StorageError> {
        let path = self.lists_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read lists: {}", e)))?;

        let snapshot: Snapshot = serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse lists: {}", e)))?;
        snapshot.validate()?;
        Ok(Some(snapshot))
    }

    pub fn save_lists(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        self.init()?;
        let yaml = serde_saphyr::to_string(snapshot)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize lists: {}", e)))?;

        atomic_write(&self.lists_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write lists: {}", e)))?;

        tracing::debug!(lists = snapshot.lists.len(), "saved lists");
        Ok(())
    }
}

/// Read a JSON snapshot from any path
pub fn import_json(path: &Path) -> Result<Snapshot, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(Snapshot::from_json(&content)?)
}

/// Write a JSON snapshot to any path
pub fn export_json(path: &Path, snapshot: &Snapshot) -> Result<(), StorageError> {
    let json = snapshot.to_json()?;
    atomic_write(path, &json)
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
