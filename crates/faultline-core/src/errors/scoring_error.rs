use super::error_code::{self, FaultlineErrorCode};

/// Scoring errors. Each of these indicates upstream data corruption and
/// rejects the whole run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("unknown lab: {lab}")]
    UnknownLab { lab: String },

    #[error("event {event_id} references unknown checklist item {item_id}")]
    UnknownChecklistItem { event_id: String, item_id: String },

    #[error("checklist item {item_id} is defined more than once")]
    DuplicateChecklistItem { item_id: String },
}

impl FaultlineErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownLab { .. } => error_code::UNKNOWN_LAB,
            Self::UnknownChecklistItem { .. } => error_code::UNKNOWN_CHECKLIST_ITEM,
            Self::DuplicateChecklistItem { .. } => error_code::DUPLICATE_CHECKLIST_ITEM,
        }
    }
}
