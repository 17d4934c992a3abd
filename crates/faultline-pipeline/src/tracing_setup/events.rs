//! Structured log events for the batch run.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

use chrono::NaiveDate;

use faultline_core::errors::{EventError, FaultlineErrorCode};
use faultline_core::models::Score;

pub fn run_started(as_of: NaiveDate, events: usize, labs: usize) {
    tracing::info!(
        event = "run_started",
        as_of = %as_of,
        events = events,
        labs = labs,
        "recalculation started"
    );
}

pub fn lab_scored(score: &Score, previous: Option<f64>) {
    tracing::info!(
        event = "lab_scored",
        lab = %score.lab_id,
        total_score = score.total_score,
        previous = ?previous,
        rank = ?score.rank,
        trend = ?score.trend,
        events_in_window = score.events_count,
        "lab scored"
    );
}

/// Log a malformed event that was left out of the run.
pub fn event_skipped(error: &EventError) {
    tracing::warn!(
        event = "event_skipped",
        code = error.error_code(),
        error = %error,
        "malformed event skipped"
    );
}

pub fn contested_item(score: &Score, item_id: &str) {
    tracing::warn!(
        event = "contested_item",
        lab = %score.lab_id,
        item_id = %item_id,
        "checklist item contested"
    );
}

/// Log the outcome of the history append for `date`.
pub fn snapshot_appended(date: NaiveDate, appended: bool, history_len: usize) {
    if appended {
        tracing::info!(
            event = "snapshot_appended",
            date = %date,
            history_len = history_len,
            "snapshot appended"
        );
    } else {
        tracing::warn!(
            event = "snapshot_appended",
            date = %date,
            history_len = history_len,
            "snapshot for this date already exists; append skipped"
        );
    }
}
