use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{FaultlineResult, ScoringError};

/// Identifier of a tracked lab (e.g. `"anthropic"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabId(String);

impl LabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LabId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LabId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Static profile of a tracked lab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabProfile {
    pub id: LabId,
    pub name: String,
    /// Labs are left out of snapshots dated before their founding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<NaiveDate>,
}

impl LabProfile {
    pub fn new(id: &str, name: &str, founded: Option<NaiveDate>) -> Self {
        Self {
            id: LabId::new(id),
            name: name.to_string(),
            founded,
        }
    }

    /// Whether the lab existed on `date`. Labs without a founding date always exist.
    pub fn exists_on(&self, date: NaiveDate) -> bool {
        self.founded.map_or(true, |founded| founded <= date)
    }
}

/// The known lab set. Scoring a lab outside this set is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabRegistry {
    labs: Vec<LabProfile>,
}

impl LabRegistry {
    pub fn new(labs: Vec<LabProfile>) -> Self {
        Self { labs }
    }

    /// Profiles in registry order.
    pub fn labs(&self) -> &[LabProfile] {
        &self.labs
    }

    pub fn ids(&self) -> impl Iterator<Item = &LabId> {
        self.labs.iter().map(|l| &l.id)
    }

    pub fn get(&self, id: &LabId) -> Option<&LabProfile> {
        self.labs.iter().find(|l| &l.id == id)
    }

    pub fn contains(&self, id: &LabId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a lab, failing with `UnknownLab` if it is not registered.
    pub fn require(&self, id: &LabId) -> FaultlineResult<&LabProfile> {
        self.get(id).ok_or_else(|| {
            ScoringError::UnknownLab {
                lab: id.to_string(),
            }
            .into()
        })
    }

    pub fn len(&self) -> usize {
        self.labs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labs.is_empty()
    }
}

impl Default for LabRegistry {
    fn default() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
        Self::new(vec![
            LabProfile::new("openai", "OpenAI", date(2015, 12, 1)),
            LabProfile::new("anthropic", "Anthropic", date(2021, 1, 1)),
            LabProfile::new("deepmind", "Google DeepMind", date(2010, 11, 1)),
            LabProfile::new("xai", "xAI", date(2023, 7, 1)),
            LabProfile::new("meta", "Meta AI", date(2013, 12, 1)),
        ])
    }
}
