//! # faultline-pipeline
//!
//! The batch layer around the scoring engine. Reads the checklist and event
//! documents, scores every lab, trends against the snapshot history, and
//! writes `scores.json` plus the appended history.

pub mod documents;
pub mod ingest;
pub mod report;
pub mod run;
pub mod tracing_setup;

pub use documents::{ChecklistDocument, EventsDocument, ScoresDocument};
pub use ingest::{merge_events, parse_events, IngestOutcome, MergeOutcome};
pub use report::{RunReport, ScoreChange};
pub use run::{run_from_config, Recalculation, RunOutcome};
