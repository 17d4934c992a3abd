//! Event ingestion: validation of raw records and merging of new events.

use std::collections::HashSet;

use faultline_core::errors::EventError;
use faultline_core::models::{Event, RawEvent};

use crate::tracing_setup::events;

/// Events that passed validation, plus the records that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestOutcome {
    pub events: Vec<Event>,
    pub skipped: Vec<EventError>,
}

/// Validate raw event records, skipping malformed ones with a warning.
pub fn parse_events(raw: &[serde_json::Value]) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    for (index, value) in raw.iter().enumerate() {
        let parsed = serde_json::from_value::<RawEvent>(value.clone())
            .map_err(|e| EventError::MalformedEvent {
                index,
                event_id: value.get("id").and_then(|v| v.as_str()).map(str::to_string),
                reason: e.to_string(),
            })
            .and_then(|raw| Event::from_raw(index, raw));

        match parsed {
            Ok(event) => outcome.events.push(event),
            Err(err) => {
                events::event_skipped(&err);
                outcome.skipped.push(err);
            }
        }
    }
    outcome
}

/// Result of merging newly classified events into the stored list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    pub events: Vec<Event>,
    pub added: usize,
    pub duplicates: usize,
}

/// Append `incoming` to `existing`, dropping events whose id or non-empty
/// `source_url` is already present. Existing events are never replaced.
pub fn merge_events(existing: Vec<Event>, incoming: Vec<Event>) -> MergeOutcome {
    let mut ids: HashSet<String> = existing.iter().map(|e| e.id.clone()).collect();
    let mut urls: HashSet<String> = existing
        .iter()
        .filter(|e| !e.source_url.is_empty())
        .map(|e| e.source_url.clone())
        .collect();

    let mut outcome = MergeOutcome {
        events: existing,
        ..MergeOutcome::default()
    };
    for event in incoming {
        let url_seen = !event.source_url.is_empty() && urls.contains(&event.source_url);
        if url_seen || ids.contains(&event.id) {
            tracing::debug!(
                event_id = %event.id,
                url = %event.source_url,
                "duplicate event dropped"
            );
            outcome.duplicates += 1;
            continue;
        }
        ids.insert(event.id.clone());
        if !event.source_url.is_empty() {
            urls.insert(event.source_url.clone());
        }
        outcome.events.push(event);
        outcome.added += 1;
    }
    outcome
}
