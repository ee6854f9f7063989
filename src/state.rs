//! Durable key-value state
//!
//! Small string map persisted as TOML under the XDG data directory. Holds
//! process-independent flags (currently only the first-run flag). Reads are
//! permissive: a missing or unparseable file is treated as an empty map.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Injected persistence capability for durable flags.
///
/// The view controller only ever needs `get`/`set` of string values, so the
/// backing store stays swappable (file-backed in production, in-memory in
/// tests and dry runs).
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns an error if the value cannot be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// TOML-backed state file
pub struct FileStateStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStateStore {
    /// Open the store at the default XDG data path
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be determined or created.
    pub fn open() -> Result<Self> {
        Ok(Self::open_at(Self::state_path()?))
    }

    /// Open the store at an explicit path. The file is read eagerly; a
    /// missing or corrupt file yields an empty store.
    pub fn open_at(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Ignoring unparseable state file {path:?}: {e}");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    /// Directory holding the state file and the TUI log file
    ///
    /// # Errors
    /// Returns an error if the XDG data directory cannot be determined or created.
    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join("bizdesk");
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir: {dir:?}"))?;
        Ok(dir)
    }

    /// Default state file location
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be determined or created.
    pub fn state_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("state.toml"))
    }

    /// Path this store reads from and writes to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create state dir: {parent:?}"))?;
        }
        let contents =
            toml::to_string_pretty(&self.entries).context("Failed to serialize state")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write state file: {:?}", self.path))?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store for tests and `resolve --dry-run`
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let mut store = FileStateStore::open_at(path.clone());
        assert_eq!(store.get("has_seen_landing"), None);
        store.set("has_seen_landing", "true").unwrap();

        // Re-open and verify durability
        let reopened = FileStateStore::open_at(path);
        assert_eq!(reopened.get("has_seen_landing").as_deref(), Some("true"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::open_at(dir.path().join("nope.toml"));
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        fs::write(&path, "{{{{ not toml").unwrap();

        let store = FileStateStore::open_at(path);
        assert_eq!(store.get("has_seen_landing"), None);
    }

    #[test]
    fn set_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        let mut store = FileStateStore::open_at(path.clone());
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn default_path_honors_xdg_data_home() {
        let guard = crate::test_utils::XdgTemp::new();
        let path = FileStateStore::state_path().unwrap();
        assert!(path.starts_with(guard.path()));
        assert!(path.ends_with("bizdesk/state.toml"));
    }

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStateStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "true").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("true"));
    }
}
