mod cli;
mod execute;

use clap::Parser;
use crate::cli::CLI;
use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "steampatch=info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = CLI::parse();
    execute::execute(cli)
}
