//! Persistence of snapshot histories.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use faultline_core::config::defaults::DEFAULT_VALIDITY_WINDOW_DAYS;
use faultline_core::constants::HISTORY_VERSION;
use faultline_core::errors::{FaultlineError, FaultlineResult};

use crate::history::SnapshotHistory;

/// Storage backend for a snapshot history.
pub trait ISnapshotStore: Send + Sync {
    /// Load the stored history. An absent store yields an empty history.
    fn load(&self) -> FaultlineResult<SnapshotHistory>;

    /// Replace the stored history with `history`.
    fn save(&self, history: &SnapshotHistory) -> FaultlineResult<()>;
}

/// On-disk shape of `historical_scores.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub generated_at: DateTime<Utc>,
    #[serde(default = "default_window")]
    pub decay_window_days: i64,
    #[serde(default)]
    pub snapshots: SnapshotHistory,
}

fn default_version() -> String {
    HISTORY_VERSION.to_string()
}

fn default_window() -> i64 {
    DEFAULT_VALIDITY_WINDOW_DAYS
}

impl HistoryDocument {
    pub fn new(snapshots: SnapshotHistory, decay_window_days: i64) -> Self {
        Self {
            version: HISTORY_VERSION.to_string(),
            generated_at: Utc::now(),
            decay_window_days,
            snapshots,
        }
    }
}

/// History stored as a pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
    decay_window_days: i64,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>, decay_window_days: i64) -> Self {
        Self {
            path: path.into(),
            decay_window_days,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full document, including its metadata.
    pub fn load_document(&self) -> FaultlineResult<Option<HistoryDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| FaultlineError::io(&self.path, e))?;
        let document: HistoryDocument = serde_json::from_str(&text)?;
        if document.decay_window_days != self.decay_window_days {
            tracing::warn!(
                path = %self.path.display(),
                stored = document.decay_window_days,
                configured = self.decay_window_days,
                "history was computed with a different validity window"
            );
        }
        Ok(Some(document))
    }
}

impl ISnapshotStore for JsonHistoryStore {
    fn load(&self) -> FaultlineResult<SnapshotHistory> {
        Ok(self
            .load_document()?
            .map(|doc| doc.snapshots)
            .unwrap_or_default())
    }

    fn save(&self, history: &SnapshotHistory) -> FaultlineResult<()> {
        let document = HistoryDocument::new(history.clone(), self.decay_window_days);
        let json = serde_json::to_string_pretty(&document)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FaultlineError::io(parent, e))?;
        }
        // Write beside the target and rename so readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| FaultlineError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| FaultlineError::io(&self.path, e))?;
        tracing::debug!(
            path = %self.path.display(),
            snapshots = history.len(),
            "history saved"
        );
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    history: Mutex<SnapshotHistory>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: SnapshotHistory) -> Self {
        Self {
            history: Mutex::new(history),
        }
    }
}

impl ISnapshotStore for MemoryHistoryStore {
    fn load(&self) -> FaultlineResult<SnapshotHistory> {
        let guard = self.history.lock().unwrap_or_else(|p| p.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, history: &SnapshotHistory) -> FaultlineResult<()> {
        let mut guard = self.history.lock().unwrap_or_else(|p| p.into_inner());
        *guard = history.clone();
        Ok(())
    }
}
