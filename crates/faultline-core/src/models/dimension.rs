use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five fragility categories.
///
/// Ordering follows the dashboard column order, so a `BTreeMap<Dimension, _>`
/// serializes breakdowns in a stable, readable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ComputeChips,
    Cloud,
    Policy,
    Demand,
    Resilience,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::ComputeChips,
        Dimension::Cloud,
        Dimension::Policy,
        Dimension::Demand,
        Dimension::Resilience,
    ];

    /// Resilience subtracts from the total instead of adding to it.
    pub fn is_resilience(self) -> bool {
        matches!(self, Dimension::Resilience)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::ComputeChips => "compute_chips",
            Dimension::Cloud => "cloud",
            Dimension::Policy => "policy",
            Dimension::Demand => "demand",
            Dimension::Resilience => "resilience",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown dimension '{s}'"))
    }
}
