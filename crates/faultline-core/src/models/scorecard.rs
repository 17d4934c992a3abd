//! Typed join of lab profiles onto scores, keyed by lab id.

use serde::Serialize;

use super::lab::{LabProfile, LabRegistry};
use super::score::Score;
use crate::errors::FaultlineResult;

/// A score together with the profile of the lab it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabScorecard<'a> {
    pub profile: &'a LabProfile,
    pub score: &'a Score,
}

/// Join every score with its lab profile, preserving score order.
///
/// Fails with `UnknownLab` if a score belongs to a lab missing from the registry.
pub fn join_profiles<'a>(
    registry: &'a LabRegistry,
    scores: &'a [Score],
) -> FaultlineResult<Vec<LabScorecard<'a>>> {
    scores
        .iter()
        .map(|score| {
            let profile = registry.require(&score.lab_id)?;
            Ok(LabScorecard { profile, score })
        })
        .collect()
}
