//! Monthly snapshots recomputed from the full event log.

use chrono::{Datelike, Duration, NaiveDate};

use faultline_core::config::TrendConfig;
use faultline_core::errors::FaultlineResult;
use faultline_core::models::{Event, LabId, Score};
use faultline_scoring::{rank_labs, ScoringEngine};

use crate::history::SnapshotHistory;
use crate::lookback::apply_lookback_trends;

/// Last day of every month whose month end falls in `[start, end]`.
pub fn month_end_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut cursor = NaiveDate::from_ymd_opt(start.year(), start.month(), 1);
    while let Some(first) = cursor {
        if first > end {
            break;
        }
        let next = next_month(first);
        let Some(month_end) = next.map(|n| n - Duration::days(1)) else {
            break;
        };
        if month_end >= start && month_end <= end {
            dates.push(month_end);
        }
        cursor = next;
    }
    dates
}

fn next_month(first: NaiveDate) -> Option<NaiveDate> {
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
}

/// Earliest and latest event dates, if any events exist.
pub fn event_span(events: &[Event]) -> Option<(NaiveDate, NaiveDate)> {
    let min = events.iter().map(|e| e.date).min()?;
    let max = events.iter().map(|e| e.date).max()?;
    Some((min, max))
}

/// Score every lab that existed on `date`, then trend and rank them.
pub fn score_snapshot(
    engine: &ScoringEngine,
    events: &[Event],
    date: NaiveDate,
    history: &SnapshotHistory,
    trend: &TrendConfig,
) -> FaultlineResult<Vec<Score>> {
    let labs: Vec<&LabId> = engine
        .registry()
        .labs()
        .iter()
        .filter(|profile| profile.exists_on(date))
        .map(|profile| &profile.id)
        .collect();
    let mut scores = engine.score_labs(labs, events, date)?;
    apply_lookback_trends(&mut scores, history, date, trend);
    Ok(rank_labs(scores))
}

/// Rebuild a month-end history between `start` and `end`.
///
/// Each snapshot only holds labs already founded on its date, and is trended
/// against the snapshots computed before it.
pub fn backfill(
    engine: &ScoringEngine,
    events: &[Event],
    start: NaiveDate,
    end: NaiveDate,
    trend: &TrendConfig,
) -> FaultlineResult<SnapshotHistory> {
    let dates = month_end_dates(start, end);
    tracing::info!(
        start = %start,
        end = %end,
        snapshots = dates.len(),
        "backfilling history"
    );

    let mut history = SnapshotHistory::new();
    for date in dates {
        let scores = score_snapshot(engine, events, date, &history, trend)?;
        history = crate::history::append_snapshot(scores, date, history)?;
    }
    Ok(history)
}
