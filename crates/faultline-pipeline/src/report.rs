use chrono::NaiveDate;
use serde::Serialize;

use faultline_core::errors::EventError;
use faultline_core::models::{LabId, Score, Trend};

/// How one lab's score moved in a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreChange {
    pub lab_id: LabId,
    /// Total from the previous `scores.json`, if the lab was in it.
    pub previous: Option<f64>,
    pub current: f64,
    pub rank: Option<u32>,
    pub trend: Option<Trend>,
}

impl ScoreChange {
    pub fn from_score(score: &Score, previous: Option<f64>) -> Self {
        Self {
            lab_id: score.lab_id.clone(),
            previous,
            current: score.total_score,
            rank: score.rank,
            trend: score.trend,
        }
    }

    pub fn delta(&self) -> Option<f64> {
        self.previous.map(|p| self.current - p)
    }
}

/// Summary of one recalculation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub as_of: NaiveDate,
    /// Valid events handed to the engine.
    pub events_considered: usize,
    /// Events inside some lab's validity window.
    pub events_in_window: usize,
    #[serde(skip)]
    pub malformed: Vec<EventError>,
    /// Per-lab changes, in rank order.
    pub changes: Vec<ScoreChange>,
    pub snapshot_appended: bool,
}

impl RunReport {
    pub fn malformed_skipped(&self) -> usize {
        self.malformed.len()
    }

    pub fn change_for(&self, lab: &LabId) -> Option<&ScoreChange> {
        self.changes.iter().find(|c| &c.lab_id == lab)
    }
}
