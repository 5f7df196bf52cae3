//! Services that orchestrate strategies.

mod detector;

pub use detector::{AccentColorDetector, DetectionState};
