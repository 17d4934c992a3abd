use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use faultline_core::errors::{FaultlineResult, HistoryError};
use faultline_core::models::{Score, Snapshot};

/// Append-only log of snapshots with strictly increasing dates.
///
/// There is no way to remove or replace a snapshot once appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SnapshotHistory {
    snapshots: Vec<Snapshot>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from stored snapshots, checking their order.
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> FaultlineResult<Self> {
        let mut history = Self::new();
        for snapshot in snapshots {
            history.push(snapshot)?;
        }
        Ok(history)
    }

    /// Append `snapshot`. Its date must be after every date already present.
    pub fn push(&mut self, snapshot: Snapshot) -> FaultlineResult<()> {
        if let Some(latest) = self.latest() {
            if snapshot.date == latest.date {
                return Err(HistoryError::DuplicateDate {
                    date: snapshot.date,
                }
                .into());
            }
            if snapshot.date < latest.date {
                return Err(HistoryError::OutOfOrder {
                    date: snapshot.date,
                    latest: latest.date,
                }
                .into());
            }
        }
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Snapshot> {
        self.snapshots
            .binary_search_by(|s| s.date.cmp(&date))
            .ok()
            .map(|i| &self.snapshots[i])
    }

    /// Snapshots dated strictly before `date`, oldest first.
    pub fn all_before(&self, date: NaiveDate) -> &[Snapshot] {
        let end = self.snapshots.partition_point(|s| s.date < date);
        &self.snapshots[..end]
    }

    /// Latest snapshot dated strictly before `date`.
    pub fn before(&self, date: NaiveDate) -> Option<&Snapshot> {
        self.all_before(date).last()
    }

    /// Latest snapshot dated on or before `date`.
    pub fn on_or_before(&self, date: NaiveDate) -> Option<&Snapshot> {
        let end = self.snapshots.partition_point(|s| s.date <= date);
        end.checked_sub(1).map(|i| &self.snapshots[i])
    }

    /// The last `n` snapshots dated strictly before `date`, oldest first.
    pub fn last_n_before(&self, date: NaiveDate, n: usize) -> &[Snapshot] {
        let before = self.all_before(date);
        &before[before.len().saturating_sub(n)..]
    }
}

impl<'de> Deserialize<'de> for SnapshotHistory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshots = Vec::<Snapshot>::deserialize(deserializer)?;
        SnapshotHistory::from_snapshots(snapshots).map_err(serde::de::Error::custom)
    }
}

/// Return `history` extended with a snapshot of `scores` taken on `date`.
///
/// Earlier snapshots are carried over untouched. Fails with `DuplicateDate`
/// or `OutOfOrder` when `date` is not after the latest snapshot.
pub fn append_snapshot(
    scores: Vec<Score>,
    date: NaiveDate,
    mut history: SnapshotHistory,
) -> FaultlineResult<SnapshotHistory> {
    let snapshot = Snapshot::new(date, scores);
    tracing::debug!(date = %date, labs = snapshot.scores.len(), "appending snapshot");
    history.push(snapshot)?;
    Ok(history)
}
