use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use faultline_core::models::{Confidence, Dimension, Event, LabId};
use faultline_scoring::ScoringEngine;
use proptest::prelude::*;
use test_fixtures::standard_checklist;

const LABS: [&str; 5] = ["openai", "anthropic", "deepmind", "xai", "meta"];
const ITEMS: [&str; 10] = ["A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2", "E1", "E2"];

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

fn arb_event() -> impl Strategy<Value = Event> {
    (
        0usize..LABS.len(),
        -400i64..30,
        -2i32..=2,
        proptest::collection::btree_set(0usize..ITEMS.len(), 0..4),
        0u32..1_000_000,
    )
        .prop_map(|(lab, offset, impact, items, n)| Event {
            id: format!("p-{n}"),
            lab: LabId::new(LABS[lab]),
            dimension: Dimension::ComputeChips,
            date: as_of() + Duration::days(offset),
            impact,
            checklist_items_affected: items
                .into_iter()
                .map(|i| ITEMS[i].to_string())
                .collect::<BTreeSet<_>>(),
            confidence: Confidence::Medium,
            source_url: String::new(),
            source_name: String::new(),
            summary: String::new(),
            historical: None,
            tags: Vec::new(),
            auto_classified: None,
        })
}

// ── Bounded totals ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn total_stays_within_bounds(events in proptest::collection::vec(arb_event(), 0..60)) {
        let engine = ScoringEngine::with_defaults(standard_checklist());
        for score in engine.score_all(&events, as_of()).unwrap() {
            prop_assert!(score.total_score >= 0.0);
            prop_assert!(score.total_score <= 10.0);
        }
    }

    #[test]
    fn dimension_scores_respect_caps(events in proptest::collection::vec(arb_event(), 0..60)) {
        let engine = ScoringEngine::with_defaults(standard_checklist());
        for score in engine.score_all(&events, as_of()).unwrap() {
            for dim in score.breakdown.values() {
                prop_assert!(dim.score >= 0.0);
                prop_assert!(dim.score <= dim.max);
            }
        }
    }
}

// ── Determinism ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn scoring_is_idempotent(events in proptest::collection::vec(arb_event(), 0..40)) {
        let engine = ScoringEngine::with_defaults(standard_checklist());
        let first = engine.score_all(&events, as_of()).unwrap();
        let second = engine.score_all(&events, as_of()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn event_order_does_not_matter(events in proptest::collection::vec(arb_event(), 0..40)) {
        let engine = ScoringEngine::with_defaults(standard_checklist());
        let mut reversed = events.clone();
        reversed.reverse();
        let a = engine.score_all(&events, as_of()).unwrap();
        let b = engine.score_all(&reversed, as_of()).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            prop_assert_eq!(x.total_score, y.total_score);
            prop_assert_eq!(&x.breakdown, &y.breakdown);
        }
    }

    #[test]
    fn future_and_expired_events_never_count(events in proptest::collection::vec(arb_event(), 0..40)) {
        let engine = ScoringEngine::with_defaults(standard_checklist());
        let in_window: Vec<Event> = events
            .iter()
            .filter(|e| {
                let age = (as_of() - e.date).num_days();
                (0..=180).contains(&age)
            })
            .cloned()
            .collect();
        let all = engine.score_all(&events, as_of()).unwrap();
        let filtered = engine.score_all(&in_window, as_of()).unwrap();
        prop_assert_eq!(all, filtered);
    }
}
