use chrono::NaiveDate;

use crate::errors::FaultlineResult;
use crate::models::{Event, LabId, LabRegistry, Score};

/// Fragility scoring over a fixed checklist.
///
/// Implementations must be pure: identical inputs give identical scores
/// and the event slice is never modified.
pub trait IScoringEngine: Send + Sync {
    /// The lab set this engine scores.
    fn registry(&self) -> &LabRegistry;

    /// Score one lab from the full event set as of `as_of`.
    fn compute_score(&self, lab: &LabId, events: &[Event], as_of: NaiveDate)
        -> FaultlineResult<Score>;
}
