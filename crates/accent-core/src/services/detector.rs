//! Accent color detector - ordered fallback with success memoization.
//!
//! The first call probes every strategy in order until one returns a color.
//! The winner is remembered and is the only strategy asked on later calls;
//! if nothing answers, the detector remembers that too and stops probing.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::domain::AccentColor;
use crate::ports::{AccentStrategy, DetectError, ProbeOutcome, StrategyKind};

/// What the detector has learned about this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionState {
    /// No detection has completed yet.
    Unknown,
    /// The strategy at this index answered first.
    Resolved(usize),
    /// No strategy applies.
    Exhausted,
}

/// Detects the desktop accent color through an ordered list of strategies.
///
/// # Concurrency
///
/// The state lock is only held for reads and the final transition, never
/// across a probe. Concurrent first calls may therefore each run the whole
/// discovery sequence; the first terminal state recorded wins.
pub struct AccentColorDetector {
    strategies: Vec<Box<dyn AccentStrategy>>,
    state: Mutex<DetectionState>,
}

impl AccentColorDetector {
    /// Create a detector that tries `strategies` in the given order.
    pub fn new(strategies: Vec<Box<dyn AccentStrategy>>) -> Self {
        Self {
            strategies,
            state: Mutex::new(DetectionState::Unknown),
        }
    }

    /// Current memoization state.
    pub fn state(&self) -> DetectionState {
        *self.lock_state()
    }

    /// Kinds of the configured strategies, in probe order.
    pub fn strategies(&self) -> Vec<StrategyKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// The memoized strategy, once resolved.
    pub fn resolved_strategy(&self) -> Option<StrategyKind> {
        match self.state() {
            DetectionState::Resolved(index) => self.strategies.get(index).map(|s| s.kind()),
            DetectionState::Unknown | DetectionState::Exhausted => None,
        }
    }

    /// Detect the accent color.
    ///
    /// Returns `Ok(None)` when no strategy applies. Errors are only possible
    /// after a strategy has been memoized and its query then fails to run.
    pub async fn detect(&self) -> Result<Option<AccentColor>, DetectError> {
        match self.state() {
            DetectionState::Exhausted => Ok(None),
            DetectionState::Resolved(index) => self.probe_resolved(index).await,
            DetectionState::Unknown => Ok(self.discover().await),
        }
    }

    async fn probe_resolved(&self, index: usize) -> Result<Option<AccentColor>, DetectError> {
        let Some(strategy) = self.strategies.get(index) else {
            return Ok(None);
        };

        match strategy.probe().await {
            Ok(outcome) => Ok(outcome.color()),
            Err(source) => Err(DetectError::Transport {
                strategy: strategy.kind(),
                source,
            }),
        }
    }

    async fn discover(&self) -> Option<AccentColor> {
        for (index, strategy) in self.strategies.iter().enumerate() {
            let kind = strategy.kind();
            match strategy.probe().await {
                Ok(ProbeOutcome::Found(color)) => {
                    info!(strategy = %kind, color = %color, "Accent color strategy selected");
                    self.transition(DetectionState::Resolved(index));
                    return Some(color);
                }
                Ok(ProbeOutcome::NotApplicable(reason)) => {
                    debug!(strategy = %kind, %reason, "Accent color strategy not applicable");
                }
                Err(err) => {
                    debug!(strategy = %kind, error = %err, "Accent color strategy unavailable");
                }
            }
        }

        debug!("No accent color strategy applies");
        self.transition(DetectionState::Exhausted);
        None
    }

    fn transition(&self, next: DetectionState) {
        let mut state = self.lock_state();
        if *state == DetectionState::Unknown {
            *state = next;
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, DetectionState> {
        // The guarded value is `Copy` and always valid, so a poisoned lock is usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
