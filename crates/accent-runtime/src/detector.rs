//! Detector wiring and the process-wide shared detector.

use accent_core::{
    AccentColor, AccentColorDetector, AccentStrategy, CommandRunner, DetectError, StrategyKind,
    default_strategies, strategy_for,
};
use std::sync::{Arc, LazyLock};

use crate::command::TokioCommandRunner;

/// Process-wide detector; its memoized state lives until the process exits.
static SHARED_DETECTOR: LazyLock<Arc<AccentColorDetector>> =
    LazyLock::new(|| Arc::new(default_detector()));

/// Build a fresh detector over the built-in strategies and the tokio runner.
///
/// Each call returns an independent detector with its own state.
pub fn default_detector() -> AccentColorDetector {
    AccentColorDetector::new(default_strategies(default_runner()))
}

/// Build one built-in strategy over the tokio runner.
pub fn default_strategy(kind: StrategyKind) -> Box<dyn AccentStrategy> {
    strategy_for(kind, default_runner())
}

/// Get the process-wide shared detector.
pub fn shared_detector() -> Arc<AccentColorDetector> {
    SHARED_DETECTOR.clone()
}

/// Detect the desktop accent color using the process-wide detector.
///
/// The first call probes each mechanism in order; later calls reuse the
/// outcome of that discovery for the rest of the process lifetime.
pub async fn detect_accent_color() -> Result<Option<AccentColor>, DetectError> {
    SHARED_DETECTOR.detect().await
}

fn default_runner() -> Arc<dyn CommandRunner> {
    Arc::new(TokioCommandRunner::new())
}
