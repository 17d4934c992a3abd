use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::lab::LabId;
use super::score::{DimensionScore, Score, Trend};

/// An immutable, dated record of all labs' scores.
///
/// Stored snapshots may hold `null` for labs not yet founded and may omit
/// `lab_id` inside each score; the map key supplies it on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredSnapshot")]
pub struct Snapshot {
    pub date: NaiveDate,
    pub scores: BTreeMap<LabId, Score>,
}

impl Snapshot {
    pub fn new(date: NaiveDate, scores: impl IntoIterator<Item = Score>) -> Self {
        Self {
            date,
            scores: scores
                .into_iter()
                .map(|s| (s.lab_id.clone(), s))
                .collect(),
        }
    }

    pub fn score_for(&self, lab: &LabId) -> Option<&Score> {
        self.scores.get(lab)
    }

    pub fn total_for(&self, lab: &LabId) -> Option<f64> {
        self.score_for(lab).map(|s| s.total_score)
    }
}

/// A snapshot as found on disk.
#[derive(Deserialize)]
struct StoredSnapshot {
    date: NaiveDate,
    #[serde(default)]
    scores: BTreeMap<LabId, Option<StoredScore>>,
}

#[derive(Deserialize)]
struct StoredScore {
    total_score: f64,
    #[serde(default)]
    breakdown: BTreeMap<Dimension, DimensionScore>,
    #[serde(default)]
    rank: Option<u32>,
    #[serde(default)]
    trend: Option<Trend>,
    #[serde(default)]
    events_count: usize,
    #[serde(default)]
    last_event_date: Option<NaiveDate>,
}

impl From<StoredSnapshot> for Snapshot {
    fn from(stored: StoredSnapshot) -> Self {
        let scores = stored
            .scores
            .into_iter()
            .filter_map(|(key, score)| {
                let score = score?;
                let score = Score {
                    lab_id: key.clone(),
                    total_score: score.total_score,
                    breakdown: score.breakdown,
                    rank: score.rank,
                    trend: score.trend,
                    events_count: score.events_count,
                    last_event_date: score.last_event_date,
                };
                Some((key, score))
            })
            .collect();
        Snapshot {
            date: stored.date,
            scores,
        }
    }
}
