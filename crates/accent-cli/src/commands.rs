//! Subcommands.

use accent_core::StrategyKind;
use clap::Subcommand;

/// Available commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Detect the accent color, trying each mechanism in order
    Detect {
        /// Ask the same detector this many times (later calls use the memoized strategy)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        repeat: u32,
    },

    /// Run a single strategy without memoization
    Probe {
        /// Strategy to run: portal, theme-name or extension
        strategy: StrategyKind,
    },

    /// List strategies in probe order with the command each one runs
    Strategies,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Detect { repeat: 1 }
    }
}
