//! # faultline-history
//!
//! Dated snapshots of every lab's score, kept in an append-only log.
//!
//! - [`SnapshotHistory`]: ordered snapshots, one per date, never rewritten.
//! - [`lookback`]: which prior snapshot a trend is measured against.
//! - [`backfill`]: month-end snapshots recomputed from the full event log.
//! - [`store`]: persistence of the `historical_scores.json` document.

pub mod backfill;
pub mod history;
pub mod lookback;
pub mod store;

pub use backfill::{backfill, event_span, month_end_dates, score_snapshot};
pub use history::{append_snapshot, SnapshotHistory};
pub use lookback::{apply_lookback_trends, baseline_for};
pub use store::{HistoryDocument, ISnapshotStore, JsonHistoryStore, MemoryHistoryStore};
