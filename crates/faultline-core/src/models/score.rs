use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::lab::LabId;

/// Evidence status of one checklist item for one lab, recomputed every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    NotTriggered,
    Triggered,
    /// Opposite-polarity evidence inside the validity window. Contributes zero.
    Contested,
}

/// Result of evaluating the evidence for one checklist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEvaluation {
    pub item_id: String,
    pub dimension: Dimension,
    pub status: ItemStatus,
    /// Ids of the in-window events referencing the item, oldest first.
    pub supporting_events: Vec<String>,
    /// Date of the most recent in-window evidence.
    pub latest_evidence: Option<NaiveDate>,
    /// Last date on which the current evidence still counts.
    pub expires_on: Option<NaiveDate>,
}

/// Per-dimension part of a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Points after capping. For resilience this is the reduction applied to the total.
    pub score: f64,
    pub max: f64,
    pub items_triggered: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items_contested: Vec<String>,
}

/// Direction of a lab's score relative to a prior snapshot.
///
/// Scores grow with fragility, so an increase is `Worsening`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

/// One lab's fragility score for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub lab_id: LabId,
    pub total_score: f64,
    pub breakdown: BTreeMap<Dimension, DimensionScore>,
    /// 1-based position among labs. Absent until ranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Absent until compared against a prior snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    /// Lab events inside the validity window.
    #[serde(default)]
    pub events_count: usize,
    #[serde(default)]
    pub last_event_date: Option<NaiveDate>,
}

impl Score {
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.breakdown.get(&dimension)
    }

    /// All triggered item ids across dimensions.
    pub fn triggered_items(&self) -> impl Iterator<Item = &str> {
        self.breakdown
            .values()
            .flat_map(|d| d.items_triggered.iter().map(String::as_str))
    }
}
