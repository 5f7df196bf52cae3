//! CLI bootstrap - the composition root.
//!
//! Wires the shared detector and installs the tracing subscriber. Handlers
//! receive a [`CliContext`] and never build infrastructure themselves.

use accent_core::AccentColorDetector;
use anyhow::anyhow;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;
use crate::presentation::OutputFormat;

/// Filter used with `--verbose` when `RUST_LOG` is not set.
const VERBOSE_FILTER: &str = "accent_core=debug,accent_runtime=debug,accent_cli=debug";

/// Resolved CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub verbose: bool,
}

impl CliConfig {
    /// Build configuration from parsed arguments (env fallbacks already applied by clap).
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            verbose: cli.verbose,
        }
    }
}

/// Everything a handler needs.
pub struct CliContext {
    pub config: CliConfig,
    pub detector: Arc<AccentColorDetector>,
}

/// Build the CLI context around the process-wide detector.
pub fn bootstrap(config: CliConfig) -> CliContext {
    CliContext {
        config,
        detector: accent_runtime::shared_detector(),
    }
}

/// Install the stderr tracing subscriber.
///
/// Priority: `RUST_LOG` > `--verbose` > default (`warn`). Logs go to stderr
/// so stdout only carries results.
pub fn init_tracing(config: &CliConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if config.verbose { VERBOSE_FILTER } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from(["accent-color", "--format", "json", "--verbose"]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_bootstrap_uses_shared_detector() {
        let ctx = bootstrap(CliConfig {
            format: OutputFormat::Text,
            verbose: false,
        });
        assert!(Arc::ptr_eq(&ctx.detector, &accent_runtime::shared_detector()));
    }
}
