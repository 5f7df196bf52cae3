//! `strategies` handler.

use accent_core::command_for;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{StrategyInfo, render_strategies};

/// List the detector's strategies in probe order.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let rows = strategy_rows(ctx);
    println!("{}", render_strategies(&rows, ctx.config.format)?);
    Ok(())
}

fn strategy_rows(ctx: &CliContext) -> Vec<StrategyInfo> {
    ctx.detector
        .strategies()
        .into_iter()
        .enumerate()
        .map(|(index, kind)| StrategyInfo::new(index + 1, kind, &command_for(kind)))
        .collect()
}
