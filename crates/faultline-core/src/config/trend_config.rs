use serde::{Deserialize, Serialize};

use super::defaults;

/// Which prior snapshot a run's trend is measured against.
///
/// In TOML: `lookback = "previous_run"`, `lookback = { days = 30 }`, or
/// `lookback = { trailing_mean = 3 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLookback {
    /// The latest snapshot strictly before the run date.
    PreviousRun,
    /// The latest snapshot on or before `run date - N days`.
    Days(u32),
    /// Mean of the lab's score over the last N snapshots before the run date.
    TrailingMean(usize),
}

/// Trend classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// A delta strictly beyond this magnitude changes the trend.
    pub threshold: f64,
    pub lookback: TrendLookback,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_TREND_THRESHOLD,
            lookback: TrendLookback::PreviousRun,
        }
    }
}
