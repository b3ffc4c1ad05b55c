use thiserror::Error;

/// Storage failure taxonomy shared by every repository port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The database could not be opened or initialized.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A mutating operation failed; the caller may retry.
    #[error("storage write failed: {0}")]
    Write(String),

    /// A read failed. Use cases turn this into a degraded read.
    #[error("storage read failed: {0}")]
    Read(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppDirsError {
    #[error("system data-local directory unavailable")]
    DataLocalDirUnavailable,
}
