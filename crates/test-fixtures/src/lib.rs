//! Test fixture loader and builders for Fault Line golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files under `data/`
//! plus small builders for checklists and events used across crates.

use std::path::PathBuf;

use chrono::NaiveDate;
use faultline_core::models::{Checklist, ChecklistItem, Confidence, Dimension, Event, LabId};
use serde::de::DeserializeOwned;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a fixture file as a string.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Panics
/// Panics on an invalid date.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| panic!("bad date {s}: {e}"))
}

/// The ten-item checklist tracked by the dashboard: two items per dimension,
/// weight 1, resilience items stored with weight -1.
pub fn standard_checklist() -> Checklist {
    let items = vec![
        ChecklistItem::new("A1", Dimension::ComputeChips, 1.0).with_name(
            "Single GPU vendor dependence",
            "Training compute relies on one chip vendor",
        ),
        ChecklistItem::new("A2", Dimension::ComputeChips, 1.0)
            .with_name("Compute supply shortfall", "Announced capacity delayed or rationed"),
        ChecklistItem::new("B1", Dimension::Cloud, 1.0)
            .with_name("Single cloud dependence", "Serving depends on one hyperscaler"),
        ChecklistItem::new("B2", Dimension::Cloud, 1.0)
            .with_name("Cloud partnership strain", "Key cloud partner renegotiates or exits"),
        ChecklistItem::new("C1", Dimension::Policy, 1.0)
            .with_name("Adverse regulatory action", "Investigation, fine, or injunction"),
        ChecklistItem::new("C2", Dimension::Policy, 1.0)
            .with_name("Export control exposure", "Restrictions affecting chips or markets"),
        ChecklistItem::new("D1", Dimension::Demand, 1.0)
            .with_name("Revenue concentration", "Large share of revenue from few customers"),
        ChecklistItem::new("D2", Dimension::Demand, 1.0)
            .with_name("Demand or funding slowdown", "Usage, revenue, or funding falls"),
        ChecklistItem::new("E1", Dimension::Resilience, -1.0)
            .with_name("Diversified compute supply", "Multiple chip vendors or in-house silicon"),
        ChecklistItem::new("E2", Dimension::Resilience, -1.0)
            .with_name("Strong capital position", "Multi-year runway secured"),
    ];
    Checklist::new(items).unwrap_or_else(|e| panic!("standard checklist invalid: {e}"))
}

/// Builder for test events with sensible defaults.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// A positive, high-confidence event for `lab` on `date` touching `items`.
    pub fn new(id: &str, lab: &str, date_str: &str, items: &[&str]) -> Self {
        Self {
            event: Event {
                id: id.to_string(),
                lab: LabId::new(lab),
                dimension: Dimension::ComputeChips,
                date: date(date_str),
                impact: 1,
                checklist_items_affected: items.iter().map(|s| s.to_string()).collect(),
                confidence: Confidence::High,
                source_url: format!("https://news.example.com/{id}"),
                source_name: "Example Wire".to_string(),
                summary: format!("Test event {id}"),
                historical: None,
                tags: Vec::new(),
                auto_classified: None,
            },
        }
    }

    pub fn impact(mut self, impact: i32) -> Self {
        self.event.impact = impact;
        self
    }

    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.event.dimension = dimension;
        self
    }

    pub fn source_url(mut self, url: &str) -> Self {
        self.event.source_url = url.to_string();
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// Shorthand for a positive event.
pub fn event(id: &str, lab: &str, date_str: &str, items: &[&str]) -> Event {
    EventBuilder::new(id, lab, date_str, items).build()
}
