//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and the mapping
//! from core errors to exit codes.

use accent_core::DetectError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No mechanism produced an accent color.
    #[error("No accent color detected")]
    NotDetected,

    /// A strategy's query could not be run.
    #[error("{0}")]
    Detection(String),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Rendering JSON output failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions (see sysexits.h):
    /// - 1: nothing detected
    /// - 70: internal software error
    /// - 71: operating system error (external command failed)
    /// - 74: IO error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotDetected => 1,
            Self::Serialization(_) => 70, // EX_SOFTWARE
            Self::Detection(_) => 71,     // EX_OSERR
            Self::Io(_) => 74,            // EX_IOERR
        }
    }
}

impl From<DetectError> for CliError {
    fn from(err: DetectError) -> Self {
        Self::Detection(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
