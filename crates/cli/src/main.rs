use clap::Parser;

mod commands;
mod demo;

use commands::Commands;

#[derive(Parser)]
#[command(name = "failover")]
#[command(about = "Route calls around a failing service with a circuit breaker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    failover_utils::tracing::init()
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    let cli = Cli::parse();
    cli.command.execute().await
}
