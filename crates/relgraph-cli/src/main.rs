//! Relgraph CLI - Build relation snapshots from text and query them.

use clap::Parser;
use relgraph_cli::commands;
use relgraph_cli::config::OutputFormat;
use relgraph_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Config may not have loaded; colored honours NO_COLOR on its own
        let formatter = Formatter::new(OutputFormat::Table, true);
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

async fn run() -> relgraph_cli::Result<()> {
    // Logs go to stderr so command output stays pipeable; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Clean(args) => commands::execute_clean(args, &formatter)?,
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter).await?,
        Command::Query(args) => commands::execute_query(args, &config, &formatter).await?,
        Command::Stats(args) => commands::execute_stats(args, &config, &formatter)?,
    }

    Ok(())
}
