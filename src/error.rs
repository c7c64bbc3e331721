//! Application-wide error types.

use thiserror::Error;

/// Process-level failures: anything that stops the service from starting or
/// keeps it from serving.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single directory operation. Each one is terminal for the
/// request that caused it; the store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("activity directory lock poisoned")]
    LockPoisoned,
}
