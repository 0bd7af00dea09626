// ── Connection history ──
//
// Newest-first list of networks the user scanned or joined, one entry per
// SSID, capped at a fixed length. `HistoryStore` persists it as JSON.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::WifiCredential;

/// Default number of entries kept.
pub const DEFAULT_LIMIT: usize = 50;

/// One remembered network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedNetwork {
    #[serde(flatten)]
    pub credential: WifiCredential,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub favorite: bool,
}

/// In-memory history with the dedupe and cap rules applied.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<SavedNetwork>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn from_entries(mut entries: Vec<SavedNetwork>, limit: usize) -> Self {
        entries.truncate(limit);
        Self { entries, limit }
    }

    /// Record a network at the front, replacing any entry with the same SSID.
    ///
    /// Re-saving resets the favourite flag, matching a fresh entry.
    pub fn record(&mut self, credential: WifiCredential, saved_at: DateTime<Utc>) {
        self.entries
            .retain(|entry| entry.credential.ssid() != credential.ssid());
        self.entries.insert(
            0,
            SavedNetwork {
                credential,
                saved_at,
                favorite: false,
            },
        );
        self.entries.truncate(self.limit);
    }

    /// Flip the favourite flag. Returns the new state, or `None` if absent.
    pub fn toggle_favorite(&mut self, ssid: &str) -> Option<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.credential.ssid() == ssid)?;
        entry.favorite = !entry.favorite;
        Some(entry.favorite)
    }

    /// Remove a network. Returns whether anything was removed.
    pub fn remove(&mut self, ssid: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.credential.ssid() != ssid);
        self.entries.len() != before
    }

    pub fn get(&self, ssid: &str) -> Option<&SavedNetwork> {
        self.entries
            .iter()
            .find(|entry| entry.credential.ssid() == ssid)
    }

    pub fn entries(&self) -> &[SavedNetwork] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// JSON-file backed history.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the history. A missing, unreadable, or corrupt file reads as empty;
    /// entries that fail validation are skipped.
    pub fn load(&self) -> History {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return History::new(self.limit);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history unreadable, starting empty");
                return History::new(self.limit);
            }
        };

        let raw = match serde_json::from_str::<Vec<serde_json::Value>>(&contents) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history corrupt, starting empty");
                return History::new(self.limit);
            }
        };

        // Bad entries are dropped one by one; the rest of the file survives.
        let entries = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                serde_json::from_value::<SavedNetwork>(value)
                    .inspect_err(|e| {
                        warn!(path = %self.path.display(), index, error = %e, "skipping invalid history entry");
                    })
                    .ok()
            })
            .collect();
        History::from_entries(entries, self.limit)
    }

    /// Write the history, creating parent directories as needed.
    pub fn persist(&self, history: &History) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(history.entries())?;
        std::fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), entries = history.len(), "history written");
        Ok(())
    }

    /// Record a network now and persist.
    pub fn save(&self, credential: WifiCredential) -> Result<(), CoreError> {
        let mut history = self.load();
        history.record(credential, Utc::now());
        self.persist(&history)
    }

    pub fn list(&self) -> Vec<SavedNetwork> {
        self.load().entries().to_vec()
    }

    pub fn get(&self, ssid: &str) -> Result<SavedNetwork, CoreError> {
        self.load()
            .get(ssid)
            .cloned()
            .ok_or_else(|| CoreError::NotInHistory { ssid: ssid.into() })
    }

    /// Flip the favourite flag and persist. Returns the new state.
    pub fn toggle_favorite(&self, ssid: &str) -> Result<bool, CoreError> {
        let mut history = self.load();
        let favorite = history
            .toggle_favorite(ssid)
            .ok_or_else(|| CoreError::NotInHistory { ssid: ssid.into() })?;
        self.persist(&history)?;
        Ok(favorite)
    }

    pub fn delete(&self, ssid: &str) -> Result<(), CoreError> {
        let mut history = self.load();
        if !history.remove(ssid) {
            return Err(CoreError::NotInHistory { ssid: ssid.into() });
        }
        self.persist(&history)
    }

    pub fn clear(&self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> CoreError {
        CoreError::HistoryIo {
            path: self.path.clone(),
            source,
        }
    }
}
