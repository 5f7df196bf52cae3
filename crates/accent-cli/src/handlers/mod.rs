//! Command handlers.

pub mod detect;
pub mod probe;
pub mod strategies;

use crate::bootstrap::CliContext;
use crate::commands::Commands;
use crate::error::CliError;

/// Route a command to its handler.
pub async fn dispatch(ctx: &CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Detect { repeat } => detect::execute(ctx, repeat).await,
        Commands::Probe { strategy } => probe::execute(ctx, strategy).await,
        Commands::Strategies => strategies::execute(ctx),
    }
}
