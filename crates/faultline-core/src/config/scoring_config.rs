use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Dimension;

/// Scoring rules configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Days after its date that an event still counts as evidence.
    pub validity_window_days: i64,
    /// Lower clamp of the total score.
    pub min_total: f64,
    /// Upper clamp of the total score.
    pub max_total: f64,
    /// Per-dimension point caps.
    pub dimension_caps: DimensionCaps,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            validity_window_days: defaults::DEFAULT_VALIDITY_WINDOW_DAYS,
            min_total: defaults::DEFAULT_MIN_TOTAL,
            max_total: defaults::DEFAULT_MAX_TOTAL,
            dimension_caps: DimensionCaps::default(),
        }
    }
}

/// Point cap for each dimension. For resilience the cap bounds the reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionCaps {
    pub compute_chips: f64,
    pub cloud: f64,
    pub policy: f64,
    pub demand: f64,
    pub resilience: f64,
}

impl DimensionCaps {
    /// Same cap for every dimension.
    pub fn uniform(cap: f64) -> Self {
        Self {
            compute_chips: cap,
            cloud: cap,
            policy: cap,
            demand: cap,
            resilience: cap,
        }
    }

    pub fn cap(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::ComputeChips => self.compute_chips,
            Dimension::Cloud => self.cloud,
            Dimension::Policy => self.policy,
            Dimension::Demand => self.demand,
            Dimension::Resilience => self.resilience,
        }
    }

    pub fn set(&mut self, dimension: Dimension, cap: f64) {
        match dimension {
            Dimension::ComputeChips => self.compute_chips = cap,
            Dimension::Cloud => self.cloud = cap,
            Dimension::Policy => self.policy = cap,
            Dimension::Demand => self.demand = cap,
            Dimension::Resilience => self.resilience = cap,
        }
    }
}

impl Default for DimensionCaps {
    fn default() -> Self {
        Self::uniform(defaults::DEFAULT_DIMENSION_CAP)
    }
}
