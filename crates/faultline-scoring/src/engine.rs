use chrono::NaiveDate;
use rayon::prelude::*;

use faultline_core::config::ScoringConfig;
use faultline_core::errors::FaultlineResult;
use faultline_core::models::{Checklist, Event, ItemStatus, LabId, LabRegistry, Score};
use faultline_core::traits::IScoringEngine;

use crate::arithmetic;
use crate::evidence::{self, EvidenceWindow, LabEvidence};
use crate::validation;

/// Scoring engine over a fixed checklist and lab set.
///
/// Holds no per-run state: every call recomputes item statuses from the
/// events it is given, so repeated or parallel calls are safe.
pub struct ScoringEngine {
    checklist: Checklist,
    registry: LabRegistry,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(checklist: Checklist, registry: LabRegistry, config: ScoringConfig) -> Self {
        Self {
            checklist,
            registry,
            config,
        }
    }

    /// Engine with the default lab set and scoring rules.
    pub fn with_defaults(checklist: Checklist) -> Self {
        Self::new(checklist, LabRegistry::default(), ScoringConfig::default())
    }

    pub fn registry(&self) -> &LabRegistry {
        &self.registry
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn window(&self, as_of: NaiveDate) -> EvidenceWindow {
        EvidenceWindow::new(as_of, self.config.validity_window_days)
    }

    /// Validate inputs and evaluate per-item evidence for `lab`.
    pub fn evaluate_evidence(
        &self,
        lab: &LabId,
        events: &[Event],
        as_of: NaiveDate,
    ) -> FaultlineResult<LabEvidence> {
        self.registry.require(lab)?;
        validation::validate_references(lab, events, &self.checklist)?;
        Ok(evidence::evaluate(
            lab,
            events,
            &self.checklist,
            self.window(as_of),
        ))
    }

    /// Score `lab` as of `as_of`. Rank and trend are left unset.
    pub fn compute_score(
        &self,
        lab: &LabId,
        events: &[Event],
        as_of: NaiveDate,
    ) -> FaultlineResult<Score> {
        let evidence = self.evaluate_evidence(lab, events, as_of)?;

        for contested in evidence.with_status(ItemStatus::Contested) {
            tracing::debug!(
                lab = %lab,
                item_id = %contested.item_id,
                events = ?contested.supporting_events,
                "contested checklist item contributes zero"
            );
        }

        let aggregate = arithmetic::aggregate(&evidence, &self.checklist, &self.config);
        tracing::debug!(
            lab = %lab,
            as_of = %as_of,
            raw_total = aggregate.raw_total,
            total_score = aggregate.total_score,
            events_in_window = evidence.events_in_window,
            "lab scored"
        );

        Ok(Score {
            lab_id: lab.clone(),
            total_score: aggregate.total_score,
            breakdown: aggregate.breakdown,
            rank: None,
            trend: None,
            events_count: evidence.events_in_window,
            last_event_date: evidence.last_event_date,
        })
    }

    /// Score every registered lab, in registry order. Fails on the first
    /// lab that cannot be scored.
    pub fn score_all(&self, events: &[Event], as_of: NaiveDate) -> FaultlineResult<Vec<Score>> {
        self.score_labs(self.registry.ids(), events, as_of)
    }

    /// Score the given labs in parallel, preserving input order.
    pub fn score_labs<'a>(
        &self,
        labs: impl IntoIterator<Item = &'a LabId>,
        events: &[Event],
        as_of: NaiveDate,
    ) -> FaultlineResult<Vec<Score>> {
        let labs: Vec<&LabId> = labs.into_iter().collect();
        labs.par_iter()
            .map(|lab| self.compute_score(lab, events, as_of))
            .collect()
    }
}

impl IScoringEngine for ScoringEngine {
    fn registry(&self) -> &LabRegistry {
        &self.registry
    }

    fn compute_score(
        &self,
        lab: &LabId,
        events: &[Event],
        as_of: NaiveDate,
    ) -> FaultlineResult<Score> {
        ScoringEngine::compute_score(self, lab, events, as_of)
    }
}
