//! OS adapters for accent color detection.
//!
//! Provides [`TokioCommandRunner`], the `tokio::process` implementation of
//! the core `CommandRunner` port, plus the wiring that turns the built-in
//! strategies into ready-to-use detectors.

#![deny(unsafe_code)]

mod command;
mod detector;

pub use command::TokioCommandRunner;
pub use detector::{
    default_detector, default_strategy, detect_accent_color, shared_detector,
};
