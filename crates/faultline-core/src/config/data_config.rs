use serde::{Deserialize, Serialize};

use super::defaults;

/// Locations of the JSON documents the batch run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub checklist_path: String,
    pub events_path: String,
    pub scores_path: String,
    pub history_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            checklist_path: defaults::DEFAULT_CHECKLIST_PATH.to_string(),
            events_path: defaults::DEFAULT_EVENTS_PATH.to_string(),
            scores_path: defaults::DEFAULT_SCORES_PATH.to_string(),
            history_path: defaults::DEFAULT_HISTORY_PATH.to_string(),
        }
    }
}
