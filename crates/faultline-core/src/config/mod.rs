//! Configuration for the scoring engine and its batch pipeline.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields
//! the stock configuration and partial documents override only what they name.

pub mod data_config;
pub mod defaults;
pub mod observability_config;
pub mod scoring_config;
pub mod trend_config;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use data_config::DataConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::{DimensionCaps, ScoringConfig};
pub use trend_config::{TrendConfig, TrendLookback};

use crate::errors::{ConfigError, FaultlineResult};
use crate::models::{Dimension, LabRegistry};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultlineConfig {
    pub scoring: ScoringConfig,
    pub trend: TrendConfig,
    pub data: DataConfig,
    pub observability: ObservabilityConfig,
    pub labs: LabRegistry,
}

impl FaultlineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> FaultlineResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> FaultlineResult<()> {
        let invalid = |field: &str, message: String| ConfigError::InvalidValue {
            field: field.to_string(),
            message,
        };

        let scoring = &self.scoring;
        if !(1..=defaults::MAX_WINDOW_DAYS).contains(&scoring.validity_window_days) {
            return Err(invalid(
                "scoring.validity_window_days",
                format!(
                    "must be between 1 and {}, got {}",
                    defaults::MAX_WINDOW_DAYS,
                    scoring.validity_window_days
                ),
            )
            .into());
        }
        if !(scoring.min_total <= scoring.max_total) {
            return Err(invalid(
                "scoring.min_total",
                format!(
                    "{} exceeds max_total {}",
                    scoring.min_total, scoring.max_total
                ),
            )
            .into());
        }
        for dimension in Dimension::ALL {
            let cap = scoring.dimension_caps.cap(dimension);
            if !(cap >= 0.0 && cap.is_finite()) {
                return Err(invalid(
                    &format!("scoring.dimension_caps.{dimension}"),
                    format!("must be a non-negative number, got {cap}"),
                )
                .into());
            }
        }

        if !(self.trend.threshold >= 0.0 && self.trend.threshold.is_finite()) {
            return Err(invalid(
                "trend.threshold",
                format!("must be a non-negative number, got {}", self.trend.threshold),
            )
            .into());
        }
        match self.trend.lookback {
            TrendLookback::Days(0) | TrendLookback::TrailingMean(0) => {
                return Err(
                    invalid("trend.lookback", "window must be at least 1".to_string()).into(),
                );
            }
            TrendLookback::Days(days) if i64::from(days) > defaults::MAX_WINDOW_DAYS => {
                return Err(invalid(
                    "trend.lookback",
                    format!(
                        "days must be at most {}, got {days}",
                        defaults::MAX_WINDOW_DAYS
                    ),
                )
                .into());
            }
            _ => {}
        }

        if self.labs.is_empty() {
            return Err(invalid("labs", "at least one lab is required".to_string()).into());
        }
        let mut seen = HashSet::new();
        for lab in self.labs.labs() {
            if lab.id.as_str().trim().is_empty() {
                return Err(invalid("labs.id", "lab id must not be empty".to_string()).into());
            }
            if !seen.insert(&lab.id) {
                return Err(invalid("labs.id", format!("duplicate lab id '{}'", lab.id)).into());
            }
        }
        Ok(())
    }
}
