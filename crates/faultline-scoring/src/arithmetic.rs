//! Score arithmetic: from item statuses to a bounded total.

use std::collections::BTreeMap;

use faultline_core::config::ScoringConfig;
use faultline_core::models::{Checklist, Dimension, DimensionScore, ItemStatus};

use crate::evidence::LabEvidence;

/// Per-dimension breakdown and clamped total for one lab.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub breakdown: BTreeMap<Dimension, DimensionScore>,
    /// Sum before clamping, kept for diagnostics.
    pub raw_total: f64,
    pub total_score: f64,
}

/// Sum triggered weights per dimension, cap each dimension, subtract the
/// resilience reduction, and clamp the total.
///
/// Resilience items subtract by the magnitude of their weight, whatever sign
/// the checklist stores it with. Contested items contribute nothing.
pub fn aggregate(
    evidence: &LabEvidence,
    checklist: &Checklist,
    config: &ScoringConfig,
) -> Aggregate {
    let mut breakdown = BTreeMap::new();
    let mut fragility = 0.0;
    let mut reduction = 0.0;

    for dimension in Dimension::ALL {
        let mut raw = 0.0;
        let mut items_triggered = Vec::new();
        let mut items_contested = Vec::new();

        for eval in evidence.evaluations.iter().filter(|e| e.dimension == dimension) {
            match eval.status {
                ItemStatus::Triggered => {
                    let weight = checklist.get(&eval.item_id).map_or(0.0, |i| i.weight);
                    raw += if dimension.is_resilience() { weight.abs() } else { weight };
                    items_triggered.push(eval.item_id.clone());
                }
                ItemStatus::Contested => items_contested.push(eval.item_id.clone()),
                ItemStatus::NotTriggered => {}
            }
        }

        let max = config.dimension_caps.cap(dimension);
        let score = bounded(raw, 0.0, max);
        if dimension.is_resilience() {
            reduction += score;
        } else {
            fragility += score;
        }

        breakdown.insert(
            dimension,
            DimensionScore {
                score,
                max,
                items_triggered,
                items_contested,
            },
        );
    }

    let raw_total = fragility - reduction;
    Aggregate {
        breakdown,
        raw_total,
        total_score: bounded(raw_total, config.min_total, config.max_total),
    }
}

/// `clamp` without the panic on inverted or NaN bounds.
fn bounded(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_tolerates_inverted_bounds() {
        assert_eq!(bounded(5.0, 0.0, 2.0), 2.0);
        assert_eq!(bounded(-1.0, 0.0, 2.0), 0.0);
        assert_eq!(bounded(1.0, 0.0, -1.0), -1.0);
    }
}
