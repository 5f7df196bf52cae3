//! Core of the accent color detector.
//!
//! This crate owns the domain types, the ports the engine needs from the
//! operating system, the three built-in strategies and the memoizing
//! [`AccentColorDetector`]. It never spawns processes itself; see
//! `accent-runtime` for the tokio-backed [`CommandRunner`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{AccentColor, ColorParseError, Palette};
pub use ports::{
    AccentStrategy, CommandError, CommandOutput, CommandRunner, CommandSpec, DetectError,
    Inapplicable, ProbeOutcome, StrategyKind, UnknownStrategy,
};
pub use services::{AccentColorDetector, DetectionState};
pub use strategies::{
    ExtensionStrategy, PortalStrategy, ThemeNameStrategy, command_for, default_strategies,
    strategy_for,
};

// Silence unused dev-dependency warnings; used by the integration tests
#[cfg(test)]
use tokio_test as _;
