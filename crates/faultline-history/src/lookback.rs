//! Trend baselines drawn from the snapshot history.

use chrono::{Duration, NaiveDate};

use faultline_core::config::{TrendConfig, TrendLookback};
use faultline_core::models::{LabId, Score};
use faultline_scoring::trend_from_baseline;

use crate::history::SnapshotHistory;

/// The prior total `lab` is compared against for a run on `as_of`.
///
/// `None` when the policy finds no snapshot holding the lab, or, for a
/// trailing mean, when fewer than N snapshots precede `as_of`.
pub fn baseline_for(
    history: &SnapshotHistory,
    lab: &LabId,
    as_of: NaiveDate,
    lookback: TrendLookback,
) -> Option<f64> {
    match lookback {
        TrendLookback::PreviousRun => history.before(as_of).and_then(|s| s.total_for(lab)),
        TrendLookback::Days(days) => {
            let cutoff = as_of.checked_sub_signed(Duration::try_days(i64::from(days))?)?;
            history.on_or_before(cutoff).and_then(|s| s.total_for(lab))
        }
        TrendLookback::TrailingMean(n) => {
            // No baseline until a full window of prior snapshots exists.
            let window = history.last_n_before(as_of, n);
            if window.len() < n {
                return None;
            }
            let totals: Vec<f64> = window
                .iter()
                .filter_map(|s| s.total_for(lab))
                .collect();
            if totals.is_empty() {
                None
            } else {
                Some(totals.iter().sum::<f64>() / totals.len() as f64)
            }
        }
    }
}

/// Set the trend of every score from the history and trend config.
pub fn apply_lookback_trends(
    scores: &mut [Score],
    history: &SnapshotHistory,
    as_of: NaiveDate,
    config: &TrendConfig,
) {
    for score in scores.iter_mut() {
        let baseline = baseline_for(history, &score.lab_id, as_of, config.lookback);
        score.trend = Some(trend_from_baseline(
            score.total_score,
            baseline,
            config.threshold,
        ));
    }
}
