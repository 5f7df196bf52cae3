//! CLI entry point - the composition root.

use anyhow::Context;
use clap::Parser;

use accent_cli::{Cli, CliConfig, bootstrap, handlers, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (RUST_LOG, ACCENT_COLOR_FORMAT)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    init_tracing(&config).context("initialize logging")?;

    let ctx = bootstrap(config);
    let command = cli.command.unwrap_or_default();

    if let Err(err) = handlers::dispatch(&ctx, command).await {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }

    Ok(())
}
