//! Data-integrity checks that reject a run before any scoring happens.

use faultline_core::errors::{FaultlineResult, ScoringError};
use faultline_core::models::{Checklist, Event, LabId};

/// Ensure every event of `lab` references only known checklist items.
///
/// All of the lab's events are checked, including ones outside the
/// validity window: an unknown id is an upstream corruption regardless of date.
pub fn validate_references(
    lab: &LabId,
    events: &[Event],
    checklist: &Checklist,
) -> FaultlineResult<()> {
    for event in events.iter().filter(|e| &e.lab == lab) {
        if let Some(item_id) = event
            .checklist_items_affected
            .iter()
            .find(|id| !checklist.contains(id))
        {
            return Err(ScoringError::UnknownChecklistItem {
                event_id: event.id.clone(),
                item_id: item_id.clone(),
            }
            .into());
        }
    }
    Ok(())
}
