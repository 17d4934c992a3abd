//! The recalculation run: score, trend, rank, snapshot, report.

use std::path::Path;

use chrono::NaiveDate;

use faultline_core::config::{FaultlineConfig, TrendConfig};
use faultline_core::errors::{EventError, FaultlineResult};
use faultline_core::models::{Event, Score};
use faultline_history::{
    append_snapshot, apply_lookback_trends, ISnapshotStore, JsonHistoryStore, SnapshotHistory,
};
use faultline_scoring::{rank_labs, ScoringEngine};

use crate::documents::{ChecklistDocument, EventsDocument, ScoresDocument};
use crate::ingest::parse_events;
use crate::report::{RunReport, ScoreChange};
use crate::tracing_setup::events;

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Scores in rank order, with rank and trend set.
    pub scores: Vec<Score>,
    pub history: SnapshotHistory,
    pub report: RunReport,
}

/// One recalculation over an engine and a trend policy.
pub struct Recalculation<'a> {
    engine: &'a ScoringEngine,
    trend: &'a TrendConfig,
}

impl<'a> Recalculation<'a> {
    pub fn new(engine: &'a ScoringEngine, trend: &'a TrendConfig) -> Self {
        Self { engine, trend }
    }

    /// Score every lab as of `as_of` and append the snapshot to `history`.
    ///
    /// `previous` is the last published `scores.json`, used only for the
    /// report. When `history` already holds a snapshot for `as_of` the
    /// append is skipped and the history returned unchanged.
    pub fn run(
        &self,
        events: &[Event],
        history: SnapshotHistory,
        previous: Option<&ScoresDocument>,
        as_of: NaiveDate,
    ) -> FaultlineResult<RunOutcome> {
        events::run_started(as_of, events.len(), self.engine.registry().len());

        let mut scores = self.engine.score_all(events, as_of)?;
        apply_lookback_trends(&mut scores, &history, as_of, self.trend);
        let scores = rank_labs(scores);

        let mut changes = Vec::with_capacity(scores.len());
        for score in &scores {
            let prior = previous.and_then(|doc| doc.total_for(&score.lab_id));
            events::lab_scored(score, prior);
            for dimension in score.breakdown.values() {
                for item_id in &dimension.items_contested {
                    events::contested_item(score, item_id);
                }
            }
            changes.push(ScoreChange::from_score(score, prior));
        }

        let (history, snapshot_appended) = if history.contains_date(as_of) {
            (history, false)
        } else {
            (append_snapshot(scores.clone(), as_of, history)?, true)
        };
        events::snapshot_appended(as_of, snapshot_appended, history.len());

        let report = RunReport {
            as_of,
            events_considered: events.len(),
            events_in_window: scores.iter().map(|s| s.events_count).sum(),
            malformed: Vec::new(),
            changes,
            snapshot_appended,
        };
        Ok(RunOutcome {
            scores,
            history,
            report,
        })
    }

    /// Count of items contested across `scores`.
    pub fn contested_count(scores: &[Score]) -> usize {
        scores
            .iter()
            .flat_map(|s| s.breakdown.values())
            .map(|d| d.items_contested.len())
            .sum()
    }
}

/// Run against the documents named in `config.data`, writing the history
/// document (when a snapshot was appended) and then `scores.json`.
pub fn run_from_config(config: &FaultlineConfig, as_of: NaiveDate) -> FaultlineResult<RunReport> {
    config.validate()?;
    let data = &config.data;

    let checklist = ChecklistDocument::load(Path::new(&data.checklist_path))?.into_checklist()?;
    let raw = EventsDocument::load(Path::new(&data.events_path))?;
    let ingested = parse_events(&raw.events);
    let malformed: Vec<EventError> = ingested.skipped;

    let engine = ScoringEngine::new(checklist, config.labs.clone(), config.scoring.clone());
    let store = JsonHistoryStore::new(&data.history_path, config.scoring.validity_window_days);
    let history = store.load()?;
    let scores_path = Path::new(&data.scores_path);
    let previous = ScoresDocument::load_optional(scores_path)?;

    let outcome = Recalculation::new(&engine, &config.trend).run(
        &ingested.events,
        history,
        previous.as_ref(),
        as_of,
    )?;

    // History first: published scores must never get ahead of it.
    if outcome.report.snapshot_appended {
        store.save(&outcome.history)?;
    }
    ScoresDocument::new(outcome.scores.clone()).save(scores_path)?;

    let report = RunReport {
        malformed,
        ..outcome.report
    };
    tracing::info!(
        as_of = %as_of,
        events = report.events_considered,
        malformed = report.malformed_skipped(),
        contested = Recalculation::contested_count(&outcome.scores),
        snapshot_appended = report.snapshot_appended,
        "recalculation complete"
    );
    Ok(report)
}
