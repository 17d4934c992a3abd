//! Error taxonomy for the Fault Line workspace.
//!
//! One enum per subsystem, unified under [`FaultlineError`]. Every enum
//! implements [`FaultlineErrorCode`] so the batch layer can report a stable
//! code alongside the message.

pub mod config_error;
pub mod error_code;
pub mod event_error;
pub mod history_error;
pub mod scoring_error;

pub use config_error::ConfigError;
pub use error_code::FaultlineErrorCode;
pub use event_error::EventError;
pub use history_error::HistoryError;
pub use scoring_error::ScoringError;

/// Top-level error for every Fault Line operation.
#[derive(Debug, thiserror::Error)]
pub enum FaultlineError {
    #[error(transparent)]
    ScoringError(#[from] ScoringError),

    #[error(transparent)]
    EventError(#[from] EventError),

    #[error(transparent)]
    HistoryError(#[from] HistoryError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FaultlineError {
    /// Wrap an I/O error with the path that caused it.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl FaultlineErrorCode for FaultlineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ScoringError(e) => e.error_code(),
            Self::EventError(e) => e.error_code(),
            Self::HistoryError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type FaultlineResult<T> = Result<T, FaultlineError>;
