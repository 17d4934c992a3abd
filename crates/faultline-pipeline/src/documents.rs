//! The JSON documents the dashboard reads and the pipeline writes.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use faultline_core::constants::SCORING_VERSION;
use faultline_core::errors::{FaultlineError, FaultlineResult};
use faultline_core::models::{Checklist, ChecklistItem, Dimension, LabId, Score};

/// `checklist.json`, in either of its two layouts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChecklistDocument {
    /// `{ "checklist_items": [{ "id", "dimension", "points" | "weight", ... }] }`
    Flat { checklist_items: Vec<ChecklistItem> },
    /// `{ "<dimension>": [{ "id", "name", "description", "weight" }] }`
    ByDimension(BTreeMap<Dimension, Vec<DimensionEntry>>),
}

/// A checklist item listed under its dimension.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DimensionEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "points")]
    pub weight: f64,
}

impl ChecklistDocument {
    pub fn load(path: &Path) -> FaultlineResult<Self> {
        read_json(path)
    }

    /// Flatten into a checklist. Dimension groups are taken in dimension order.
    pub fn into_checklist(self) -> FaultlineResult<Checklist> {
        let items = match self {
            ChecklistDocument::Flat { checklist_items } => checklist_items,
            ChecklistDocument::ByDimension(groups) => groups
                .into_iter()
                .flat_map(|(dimension, entries)| {
                    entries.into_iter().map(move |e| ChecklistItem {
                        id: e.id,
                        dimension,
                        name: e.name,
                        description: e.description,
                        weight: e.weight,
                    })
                })
                .collect(),
        };
        Checklist::new(items)
    }
}

/// `events.json`. Events stay as raw JSON until ingestion so one bad record
/// cannot fail the whole document; other top-level keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsDocument {
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EventsDocument {
    pub fn load(path: &Path) -> FaultlineResult<Self> {
        read_json(path)
    }

    pub fn save(&self, path: &Path) -> FaultlineResult<()> {
        write_json(path, self)
    }
}

/// `scores.json`: the current ranking as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoresDocument {
    pub last_updated: DateTime<Utc>,
    pub scoring_version: String,
    pub scores: Vec<Score>,
}

impl ScoresDocument {
    pub fn new(scores: Vec<Score>) -> Self {
        Self {
            last_updated: Utc::now(),
            scoring_version: SCORING_VERSION.to_string(),
            scores,
        }
    }

    /// Load the document if it exists.
    pub fn load_optional(path: &Path) -> FaultlineResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        read_json(path).map(Some)
    }

    pub fn save(&self, path: &Path) -> FaultlineResult<()> {
        write_json(path, self)
    }

    pub fn total_for(&self, lab: &LabId) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| &s.lab_id == lab)
            .map(|s| s.total_score)
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> FaultlineResult<T> {
    let text = std::fs::read_to_string(path).map_err(|e| FaultlineError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> FaultlineResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FaultlineError::io(parent, e))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| FaultlineError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| FaultlineError::io(path, e))
}
