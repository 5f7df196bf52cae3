//! `detect` handler.

use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{DetectionReport, render_detection};

/// Run the detector `repeat` times and print each result.
///
/// Fails with [`CliError::NotDetected`] when the last call found nothing.
pub async fn execute(ctx: &CliContext, repeat: u32) -> Result<(), CliError> {
    let mut found = false;

    for attempt in 1..=repeat {
        let color = ctx.detector.detect().await?;
        debug!(attempt, state = ?ctx.detector.state(), "Detection finished");

        found = color.is_some();
        let report = DetectionReport::new(
            color,
            ctx.detector.resolved_strategy(),
            ctx.detector.state(),
        );
        let line = render_detection(&report, ctx.config.format)?;
        if !line.is_empty() {
            println!("{line}");
        }
    }

    if found { Ok(()) } else { Err(CliError::NotDetected) }
}
