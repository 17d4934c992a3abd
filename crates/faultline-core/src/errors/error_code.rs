//! Stable error codes for reporting.

/// Trait for mapping Fault Line errors to stable code strings.
/// Every error enum implements this so run reports and logs can carry a
/// machine-readable code next to the human message.
pub trait FaultlineErrorCode {
    /// Returns the code string (e.g., "UNKNOWN_LAB").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_LAB: &str = "UNKNOWN_LAB";
pub const UNKNOWN_CHECKLIST_ITEM: &str = "UNKNOWN_CHECKLIST_ITEM";
pub const DUPLICATE_CHECKLIST_ITEM: &str = "DUPLICATE_CHECKLIST_ITEM";
pub const MALFORMED_EVENT: &str = "MALFORMED_EVENT";
pub const HISTORY_ORDER: &str = "HISTORY_ORDER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
