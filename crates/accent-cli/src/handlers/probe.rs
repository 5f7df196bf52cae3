//! `probe` handler - run one strategy directly.

use accent_core::{ProbeOutcome, StrategyKind};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{ProbeReport, ProbeStatus, render_probe};

/// Probe a single strategy, bypassing the detector's memoization.
pub async fn execute(ctx: &CliContext, kind: StrategyKind) -> Result<(), CliError> {
    let strategy = accent_runtime::default_strategy(kind);
    let report = match strategy.probe().await {
        Ok(outcome) => report_for(kind, outcome),
        Err(err) => ProbeReport {
            strategy: kind.name(),
            status: ProbeStatus::Failed,
            accent_color: None,
            detail: Some(err.to_string()),
        },
    };

    println!("{}", render_probe(&report, ctx.config.format)?);

    match report.status {
        ProbeStatus::Found => Ok(()),
        ProbeStatus::NotApplicable => Err(CliError::NotDetected),
        ProbeStatus::Failed => Err(CliError::Detection(format!(
            "Accent color strategy {kind} failed"
        ))),
    }
}

fn report_for(kind: StrategyKind, outcome: ProbeOutcome) -> ProbeReport {
    match outcome {
        ProbeOutcome::Found(color) => ProbeReport {
            strategy: kind.name(),
            status: ProbeStatus::Found,
            accent_color: Some(color),
            detail: None,
        },
        ProbeOutcome::NotApplicable(reason) => ProbeReport {
            strategy: kind.name(),
            status: ProbeStatus::NotApplicable,
            accent_color: None,
            detail: Some(reason.to_string()),
        },
    }
}
