/// Fault Line crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version stamped into `scores.json` documents.
pub const SCORING_VERSION: &str = "1.0.0";

/// Version stamped into `historical_scores.json` documents.
pub const HISTORY_VERSION: &str = "1.0.0";

/// Lower bound of a lab's total fragility score.
pub const MIN_TOTAL_SCORE: f64 = 0.0;

/// Upper bound of a lab's total fragility score.
pub const MAX_TOTAL_SCORE: f64 = 10.0;

/// Tolerance used when comparing score deltas against thresholds.
pub const SCORE_EPSILON: f64 = 1e-9;
