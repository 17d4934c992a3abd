use chrono::NaiveDate;

use super::error_code::{self, FaultlineErrorCode};

/// Snapshot history errors. History is append-only and strictly ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("snapshot dated {date} precedes latest snapshot {latest}")]
    OutOfOrder { date: NaiveDate, latest: NaiveDate },

    #[error("a snapshot already exists for {date}")]
    DuplicateDate { date: NaiveDate },
}

impl FaultlineErrorCode for HistoryError {
    fn error_code(&self) -> &'static str {
        error_code::HISTORY_ORDER
    }
}
