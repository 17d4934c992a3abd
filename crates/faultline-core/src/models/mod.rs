//! Data model: taxonomy, evidence, and score records.

pub mod checklist;
pub mod dimension;
pub mod event;
pub mod lab;
pub mod score;
pub mod scorecard;
pub mod snapshot;

pub use checklist::{Checklist, ChecklistItem};
pub use dimension::Dimension;
pub use event::{Confidence, Event, Polarity, RawEvent};
pub use lab::{LabId, LabProfile, LabRegistry};
pub use score::{DimensionScore, ItemEvaluation, ItemStatus, Score, Trend};
pub use scorecard::{join_profiles, LabScorecard};
pub use snapshot::Snapshot;
