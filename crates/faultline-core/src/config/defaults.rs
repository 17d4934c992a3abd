// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_VALIDITY_WINDOW_DAYS: i64 = 180;
pub const DEFAULT_DIMENSION_CAP: f64 = 2.0;
pub const DEFAULT_MIN_TOTAL: f64 = 0.0;
pub const DEFAULT_MAX_TOTAL: f64 = 10.0;

/// Longest accepted validity window or day-based lookback, about four centuries.
pub const MAX_WINDOW_DAYS: i64 = 146_097;

// --- Trend ---
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.2;

// --- Data ---
pub const DEFAULT_CHECKLIST_PATH: &str = "docs/data/checklist.json";
pub const DEFAULT_EVENTS_PATH: &str = "docs/data/events.json";
pub const DEFAULT_SCORES_PATH: &str = "docs/data/scores.json";
pub const DEFAULT_HISTORY_PATH: &str = "docs/data/historical_scores.json";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
