//! Trend classification against a prior snapshot.
//!
//! Scores grow with fragility, so a rising score is `Worsening`.

use faultline_core::constants::SCORE_EPSILON;
use faultline_core::models::{Score, Snapshot, Trend};

/// Classify a score delta (`current - prior`).
///
/// Only a delta strictly beyond `threshold` moves the trend; a delta equal to
/// the threshold, up to float noise, is stable.
pub fn classify_delta(delta: f64, threshold: f64) -> Trend {
    let bound = threshold + SCORE_EPSILON;
    if delta > bound {
        Trend::Worsening
    } else if delta < -bound {
        Trend::Improving
    } else {
        Trend::Stable
    }
}

/// Trend of `current_total` against a baseline. No baseline → stable.
pub fn trend_from_baseline(current_total: f64, baseline: Option<f64>, threshold: f64) -> Trend {
    match baseline {
        Some(prior) => classify_delta(current_total - prior, threshold),
        None => Trend::Stable,
    }
}

/// Trend of `current` against the same lab in `prior`.
///
/// Stable when there is no prior snapshot or the lab is absent from it.
pub fn compute_trend(current: &Score, prior: Option<&Snapshot>, threshold: f64) -> Trend {
    let baseline = prior.and_then(|s| s.total_for(&current.lab_id));
    trend_from_baseline(current.total_score, baseline, threshold)
}

/// Set `trend` on every score from the same prior snapshot.
pub fn apply_trends(scores: &mut [Score], prior: Option<&Snapshot>, threshold: f64) {
    for score in scores.iter_mut() {
        score.trend = Some(compute_trend(score, prior, threshold));
    }
}
