use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use crate::errors::{FaultlineError, FaultlineResult, ScoringError};

/// An atomic, named fragility signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identifier, e.g. `"A1"`.
    pub id: String,
    pub dimension: Dimension,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Points contributed when triggered. Resilience items carry negative
    /// weights in source data; only the magnitude is used for them.
    #[serde(alias = "points")]
    pub weight: f64,
}

impl ChecklistItem {
    pub fn new(id: &str, dimension: Dimension, weight: f64) -> Self {
        Self {
            id: id.to_string(),
            dimension,
            name: String::new(),
            description: String::new(),
            weight,
        }
    }

    pub fn with_name(mut self, name: &str, description: &str) -> Self {
        self.name = name.to_string();
        self.description = description.to_string();
        self
    }
}

/// The checklist taxonomy: immutable, loaded once, indexed by item id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChecklistItem>", into = "Vec<ChecklistItem>")]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    index: HashMap<String, usize>,
}

impl Checklist {
    /// Build a checklist, rejecting duplicate ids.
    pub fn new(items: Vec<ChecklistItem>) -> FaultlineResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(ScoringError::DuplicateChecklistItem {
                    item_id: item.id.clone(),
                }
                .into());
            }
        }
        Ok(Self { items, index })
    }

    pub fn get(&self, id: &str) -> Option<&ChecklistItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All items in definition order.
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Items of one dimension, in definition order.
    pub fn items_in(&self, dimension: Dimension) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(move |i| i.dimension == dimension)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<ChecklistItem>> for Checklist {
    type Error = FaultlineError;

    fn try_from(items: Vec<ChecklistItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Checklist> for Vec<ChecklistItem> {
    fn from(checklist: Checklist) -> Self {
        checklist.items
    }
}
