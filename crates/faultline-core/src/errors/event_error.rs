use super::error_code::{self, FaultlineErrorCode};

/// Event validation errors. A malformed event is skipped with a recorded
/// warning rather than aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("malformed event at index {index} (id: {}): {reason}", event_id.as_deref().unwrap_or("<none>"))]
    MalformedEvent {
        index: usize,
        event_id: Option<String>,
        reason: String,
    },
}

impl FaultlineErrorCode for EventError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_EVENT
    }
}
