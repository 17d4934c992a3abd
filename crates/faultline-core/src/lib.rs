//! # faultline-core
//!
//! Foundation crate for the Fault Line fragility tracker.
//! Defines the checklist taxonomy, events, scores, snapshots, errors,
//! config, and the engine traits. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FaultlineConfig;
pub use errors::{FaultlineError, FaultlineResult};
pub use models::{
    Checklist, ChecklistItem, Confidence, Dimension, DimensionScore, Event, ItemStatus, LabId,
    LabProfile, LabRegistry, Polarity, Score, Snapshot, Trend,
};
