use faultline_core::config::{DimensionCaps, ScoringConfig};
use faultline_core::errors::{FaultlineError, ScoringError};
use faultline_core::models::*;
use faultline_scoring::ScoringEngine;
use test_fixtures::{date, event, standard_checklist, EventBuilder};

fn engine() -> ScoringEngine {
    ScoringEngine::with_defaults(standard_checklist())
}

fn openai() -> LabId {
    LabId::new("openai")
}

// ── Worked examples ─────────────────────────────────────────────────────

#[test]
fn single_item_triggered_on_day_zero_scores_its_weight() {
    let events = vec![event("e1", "openai", "2025-07-01", &["A1"])];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();

    assert_eq!(score.total_score, 1.0);
    let compute = score.dimension(Dimension::ComputeChips).unwrap();
    assert_eq!(compute.score, 1.0);
    assert_eq!(compute.max, 2.0);
    assert_eq!(compute.items_triggered, vec!["A1"]);
    assert!(score.dimension(Dimension::Cloud).unwrap().items_triggered.is_empty());
    assert_eq!(score.dimension(Dimension::Resilience).unwrap().score, 0.0);
    assert_eq!(score.rank, None);
    assert_eq!(score.trend, None);
}

#[test]
fn maxed_fragility_minus_one_resilience_item_is_seven() {
    let events = vec![
        event("e1", "openai", "2025-06-01", &["A1", "A2", "B1", "B2"]),
        event("e2", "openai", "2025-06-02", &["C1", "C2", "D1", "D2"]),
        EventBuilder::new("e3", "openai", "2025-06-03", &["E1"])
            .impact(-1)
            .dimension(Dimension::Resilience)
            .build(),
    ];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 7.0);
    assert_eq!(score.dimension(Dimension::Resilience).unwrap().score, 1.0);
}

#[test]
fn raw_sum_above_ten_is_clamped() {
    let mut items: Vec<ChecklistItem> = standard_checklist().items().to_vec();
    for id in ["A3", "A4", "A5"] {
        items.push(ChecklistItem::new(id, Dimension::ComputeChips, 1.0));
    }
    let checklist = Checklist::new(items).unwrap();
    let mut caps = DimensionCaps::default();
    caps.set(Dimension::ComputeChips, 5.0);
    let config = ScoringConfig {
        dimension_caps: caps,
        ..ScoringConfig::default()
    };
    let engine = ScoringEngine::new(checklist, LabRegistry::default(), config);

    let events = vec![event(
        "e1",
        "openai",
        "2025-06-01",
        &["A1", "A2", "A3", "A4", "A5", "B1", "B2", "C1", "C2", "D1", "D2"],
    )];
    let evidence = engine
        .evaluate_evidence(&openai(), &events, date("2025-07-01"))
        .unwrap();
    let aggregate =
        faultline_scoring::arithmetic::aggregate(&evidence, engine.checklist(), engine.config());
    assert_eq!(aggregate.raw_total, 11.0);
    assert_eq!(aggregate.total_score, 10.0);

    let score = engine
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 10.0);
}

// ── Dimension caps ──────────────────────────────────────────────────────

#[test]
fn dimension_score_never_exceeds_cap() {
    let checklist = Checklist::new(vec![
        ChecklistItem::new("A1", Dimension::ComputeChips, 1.5),
        ChecklistItem::new("A2", Dimension::ComputeChips, 1.5),
    ])
    .unwrap();
    let engine = ScoringEngine::with_defaults(checklist);
    let events = vec![event("e1", "openai", "2025-06-01", &["A1", "A2"])];
    let score = engine
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    let compute = score.dimension(Dimension::ComputeChips).unwrap();
    assert_eq!(compute.score, 2.0);
    assert_eq!(compute.items_triggered.len(), 2);
}

#[test]
fn resilience_reduction_is_capped() {
    let mut items: Vec<ChecklistItem> = standard_checklist().items().to_vec();
    items.push(ChecklistItem::new("E3", Dimension::Resilience, -1.0));
    let engine = ScoringEngine::with_defaults(Checklist::new(items).unwrap());
    let events = vec![
        event("e1", "openai", "2025-06-01", &["A1", "A2", "B1", "B2"]),
        event("e2", "openai", "2025-06-01", &["E1", "E2", "E3"]),
    ];
    let score = engine
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.dimension(Dimension::Resilience).unwrap().score, 2.0);
    assert_eq!(score.total_score, 2.0);
}

// ── Evidence window ─────────────────────────────────────────────────────

#[test]
fn event_older_than_window_does_not_trigger() {
    // 2025-01-01 is 181 days before 2025-07-01.
    let events = vec![event("old", "openai", "2025-01-01", &["A1"])];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 0.0);
    assert_eq!(score.triggered_items().count(), 0);
    assert_eq!(score.events_count, 0);
    assert_eq!(score.last_event_date, None);
}

#[test]
fn event_exactly_at_window_edge_still_counts() {
    let events = vec![event("edge", "openai", "2025-01-02", &["A1"])];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 1.0);
}

#[test]
fn reaffirming_event_extends_validity() {
    let events = vec![
        event("old", "openai", "2024-12-01", &["A1"]),
        event("new", "openai", "2025-06-01", &["A1"]),
    ];
    let engine = engine();
    let evidence = engine
        .evaluate_evidence(&openai(), &events, date("2025-07-01"))
        .unwrap();
    let a1 = evidence.evaluation("A1").unwrap();
    assert_eq!(a1.status, ItemStatus::Triggered);
    assert_eq!(a1.supporting_events, vec!["new"]);
    assert_eq!(a1.latest_evidence, Some(date("2025-06-01")));
    assert_eq!(a1.expires_on, Some(date("2025-11-28")));
}

#[test]
fn window_beyond_calendar_range_scores_without_expiry() {
    let config = ScoringConfig {
        validity_window_days: 100_000_000,
        ..ScoringConfig::default()
    };
    let engine = ScoringEngine::new(standard_checklist(), LabRegistry::default(), config);
    let events = vec![event("e1", "openai", "1990-01-01", &["A1"])];

    let score = engine
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 1.0);

    let evidence = engine
        .evaluate_evidence(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(evidence.evaluation("A1").unwrap().expires_on, None);
}

#[test]
fn historical_recompute_ignores_later_events() {
    let events = vec![
        event("e1", "openai", "2025-01-10", &["A1"]),
        event("e2", "openai", "2025-03-10", &["B1"]),
    ];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-02-01"))
        .unwrap();
    assert_eq!(score.total_score, 1.0);
    assert_eq!(score.last_event_date, Some(date("2025-01-10")));
}

#[test]
fn other_labs_events_are_ignored() {
    let events = vec![event("e1", "anthropic", "2025-06-01", &["A1", "A2"])];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 0.0);
}

// ── Contradictions ──────────────────────────────────────────────────────

#[test]
fn opposite_polarity_in_window_is_contested_and_scores_zero() {
    let events = vec![
        event("up", "openai", "2025-06-01", &["A1"]),
        EventBuilder::new("down", "openai", "2025-06-10", &["A1"])
            .impact(-1)
            .build(),
    ];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    let compute = score.dimension(Dimension::ComputeChips).unwrap();
    assert_eq!(compute.score, 0.0);
    assert!(compute.items_triggered.is_empty());
    assert_eq!(compute.items_contested, vec!["A1"]);
    assert_eq!(score.total_score, 0.0);
}

#[test]
fn contested_resilience_item_does_not_reduce() {
    let events = vec![
        event("e1", "openai", "2025-06-01", &["A1", "A2"]),
        event("e2", "openai", "2025-06-01", &["E1"]),
        EventBuilder::new("e3", "openai", "2025-06-05", &["E1"])
            .impact(-1)
            .build(),
    ];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 2.0);
}

#[test]
fn neutral_evidence_does_not_contest() {
    let events = vec![
        event("up", "openai", "2025-06-01", &["A1"]),
        EventBuilder::new("flat", "openai", "2025-06-10", &["A1"])
            .impact(0)
            .build(),
    ];
    let score = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 1.0);
}

// ── Errors ──────────────────────────────────────────────────────────────

#[test]
fn unknown_lab_is_rejected() {
    let err = engine()
        .compute_score(&LabId::new("skynet"), &[], date("2025-07-01"))
        .unwrap_err();
    assert!(matches!(
        err,
        FaultlineError::ScoringError(ScoringError::UnknownLab { ref lab }) if lab == "skynet"
    ));
}

#[test]
fn unknown_checklist_item_is_surfaced() {
    let events = vec![event("bad", "openai", "2025-06-01", &["A1", "Z9"])];
    let err = engine()
        .compute_score(&openai(), &events, date("2025-07-01"))
        .unwrap_err();
    assert!(matches!(
        err,
        FaultlineError::ScoringError(ScoringError::UnknownChecklistItem { ref event_id, ref item_id })
            if event_id == "bad" && item_id == "Z9"
    ));
}

#[test]
fn score_all_rejects_run_on_unknown_item() {
    let events = vec![
        event("ok", "openai", "2025-06-01", &["A1"]),
        event("bad", "meta", "2025-06-01", &["Q1"]),
    ];
    assert!(engine().score_all(&events, date("2025-07-01")).is_err());
}

// ── Purity ──────────────────────────────────────────────────────────────

#[test]
fn compute_score_is_idempotent_and_leaves_inputs_untouched() {
    let events = vec![
        event("e1", "openai", "2025-06-01", &["A1", "B1"]),
        EventBuilder::new("e2", "openai", "2025-06-05", &["B1"]).impact(-1).build(),
    ];
    let before = events.clone();
    let engine = engine();
    let first = engine.compute_score(&openai(), &events, date("2025-07-01")).unwrap();
    let second = engine.compute_score(&openai(), &events, date("2025-07-01")).unwrap();
    assert_eq!(first, second);
    assert_eq!(events, before);
}

#[test]
fn score_all_follows_registry_order() {
    let events = vec![event("e1", "meta", "2025-06-01", &["A1"])];
    let scores = engine().score_all(&events, date("2025-07-01")).unwrap();
    let ids: Vec<&str> = scores.iter().map(|s| s.lab_id.as_str()).collect();
    assert_eq!(ids, ["openai", "anthropic", "deepmind", "xai", "meta"]);
    assert_eq!(scores[4].total_score, 1.0);
}

#[test]
fn engine_is_usable_through_the_trait() {
    use faultline_core::traits::IScoringEngine;

    let engine: Box<dyn IScoringEngine> = Box::new(engine());
    assert_eq!(engine.registry().len(), 5);
    let score = engine
        .compute_score(&openai(), &[], date("2025-07-01"))
        .unwrap();
    assert_eq!(score.total_score, 0.0);
    assert_eq!(score.breakdown.len(), 5);
}
