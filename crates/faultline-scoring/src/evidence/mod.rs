//! Evidence evaluation: from a lab's events to per-item statuses.

pub mod status;
pub mod window;

use std::collections::HashMap;

use chrono::NaiveDate;
use faultline_core::models::{Checklist, Event, ItemEvaluation, ItemStatus, LabId};

pub use window::EvidenceWindow;

/// Evaluated evidence for one lab on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct LabEvidence {
    pub lab: LabId,
    pub as_of: NaiveDate,
    /// One evaluation per checklist item, in checklist order.
    pub evaluations: Vec<ItemEvaluation>,
    /// Lab events inside the validity window.
    pub events_in_window: usize,
    pub last_event_date: Option<NaiveDate>,
}

impl LabEvidence {
    pub fn evaluation(&self, item_id: &str) -> Option<&ItemEvaluation> {
        self.evaluations.iter().find(|e| e.item_id == item_id)
    }

    pub fn status(&self, item_id: &str) -> Option<ItemStatus> {
        self.evaluation(item_id).map(|e| e.status)
    }

    pub fn with_status(&self, status: ItemStatus) -> impl Iterator<Item = &ItemEvaluation> {
        self.evaluations.iter().filter(move |e| e.status == status)
    }
}

/// Evaluate every checklist item for `lab` from `events`.
///
/// Only events of `lab` dated inside `window` are considered. References to
/// ids missing from the checklist are ignored here; callers validate them first.
pub fn evaluate(
    lab: &LabId,
    events: &[Event],
    checklist: &Checklist,
    window: EvidenceWindow,
) -> LabEvidence {
    let in_window: Vec<&Event> = events
        .iter()
        .filter(|e| &e.lab == lab && window.contains(e.date))
        .collect();

    let mut by_item: HashMap<&str, Vec<&Event>> = HashMap::new();
    for &event in &in_window {
        for item_id in &event.checklist_items_affected {
            by_item.entry(item_id.as_str()).or_default().push(event);
        }
    }

    let evaluations = checklist
        .items()
        .iter()
        .map(|item| {
            let mut support = by_item.remove(item.id.as_str()).unwrap_or_default();
            support.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

            for event in support.iter().filter(|e| e.dimension != item.dimension) {
                tracing::debug!(
                    lab = %lab,
                    event_id = %event.id,
                    item_id = %item.id,
                    event_dimension = %event.dimension,
                    item_dimension = %item.dimension,
                    "event dimension differs from checklist item dimension; item dimension applies"
                );
            }

            let status = status::classify(support.iter().map(|e| e.polarity()));
            let latest_evidence = support.last().map(|e| e.date);
            ItemEvaluation {
                item_id: item.id.clone(),
                dimension: item.dimension,
                status,
                supporting_events: support.iter().map(|e| e.id.clone()).collect(),
                latest_evidence,
                expires_on: latest_evidence.and_then(|d| window.expires_on(d)),
            }
        })
        .collect();

    LabEvidence {
        lab: lab.clone(),
        as_of: window.as_of,
        evaluations,
        events_in_window: in_window.len(),
        last_event_date: in_window.iter().map(|e| e.date).max(),
    }
}
