//! Classified news events: the evidence the scoring engine consumes.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::lab::LabId;
use crate::errors::EventError;

/// Classifier confidence in an event's tagging. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Sign of an event's impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn of(impact: i32) -> Self {
        match impact.signum() {
            1 => Polarity::Positive,
            -1 => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }
}

/// A dated, lab-tagged, dimension-tagged fact. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub lab: LabId,
    pub dimension: Dimension,
    pub date: NaiveDate,
    pub impact: i32,
    #[serde(default)]
    pub checklist_items_affected: BTreeSet<String>,
    pub confidence: Confidence,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_classified: Option<bool>,
}

impl Event {
    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.impact)
    }

    pub fn references(&self, item_id: &str) -> bool {
        self.checklist_items_affected.contains(item_id)
    }

    /// Validate a loosely-typed record into an event.
    ///
    /// `index` is the record's position in its source document, used only
    /// for error reporting.
    pub fn from_raw(index: usize, raw: RawEvent) -> Result<Event, EventError> {
        let event_id = raw.id.clone();
        let malformed = |reason: String| EventError::MalformedEvent {
            index,
            event_id: event_id.clone(),
            reason,
        };
        let missing = |field: &str| malformed(format!("missing required field '{field}'"));

        let id = raw
            .id
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| missing("id"))?;
        let lab = raw
            .lab
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| missing("lab"))?;
        let dimension = raw
            .dimension
            .ok_or_else(|| missing("dimension"))?
            .parse::<Dimension>()
            .map_err(&malformed)?;
        let date_str = raw.date.ok_or_else(|| missing("date"))?;
        // Classifier output sometimes carries a full timestamp; the date is the prefix.
        let date = NaiveDate::parse_from_str(date_str.get(..10).unwrap_or(&date_str), "%Y-%m-%d")
            .map_err(|e| malformed(format!("invalid date '{date_str}': {e}")))?;
        let impact = raw.impact.ok_or_else(|| missing("impact"))?;
        let impact = i32::try_from(impact)
            .map_err(|_| malformed(format!("impact {impact} out of range")))?;
        let confidence = raw.confidence.ok_or_else(|| missing("confidence"))?;

        Ok(Event {
            id,
            lab: LabId::new(lab),
            dimension,
            date,
            impact,
            checklist_items_affected: raw.checklist_items_affected.into_iter().collect(),
            confidence,
            source_url: raw.source_url.unwrap_or_default(),
            source_name: raw.source_name.unwrap_or_default(),
            summary: raw.summary.unwrap_or_default(),
            historical: raw.historical,
            tags: raw.tags,
            auto_classified: raw.auto_classified,
        })
    }
}

/// An event record as found in `events.json`, before validation.
///
/// Every field is optional so that a single incomplete record can be
/// reported and skipped instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    pub id: Option<String>,
    pub lab: Option<String>,
    pub dimension: Option<String>,
    pub date: Option<String>,
    pub impact: Option<i64>,
    #[serde(default)]
    pub checklist_items_affected: Vec<String>,
    pub confidence: Option<Confidence>,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub summary: Option<String>,
    pub historical: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub auto_classified: Option<bool>,
}
