//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the detection engine expects from
//! infrastructure. They contain no implementation details.
//!
//! # Design Rules
//!
//! - No `tokio::process` or `std::process` types in any signature
//! - Transport failures ([`CommandError`]) are kept apart from
//!   "setting not present" outcomes ([`ProbeOutcome::NotApplicable`])

pub mod accent_strategy;
pub mod command_runner;

use thiserror::Error;

pub use accent_strategy::{AccentStrategy, Inapplicable, ProbeOutcome, StrategyKind, UnknownStrategy};
pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program could not be started (not found, not executable, ...).
    #[error("Failed to launch {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited with a failing status.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("{program} exited with {}: {}", exit_label(.code), .stderr.trim())]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Reading output or waiting for exit failed after a successful launch.
    #[error("I/O error while running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| format!("code {c}"))
}

impl CommandError {
    /// Name of the program that failed.
    #[must_use]
    pub fn program(&self) -> &str {
        match self {
            Self::LaunchFailed { program, .. }
            | Self::NonZeroExit { program, .. }
            | Self::Io { program, .. } => program,
        }
    }
}

/// Errors surfaced by [`crate::AccentColorDetector::detect`].
///
/// Discovery never produces an error; only the memoized strategy's
/// transport failures reach the caller.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Accent color strategy {strategy} failed: {source}")]
    Transport {
        strategy: StrategyKind,
        #[source]
        source: CommandError,
    },
}
