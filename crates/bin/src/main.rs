use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so command output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("amity=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.storage.config();

    let result = match &cli.command {
        Commands::Info => commands::info::run(config, cli.format),
        Commands::Accounts => commands::accounts::run(config, cli.format),
        Commands::Friends(args) => commands::friends::run(args, config, cli.format),
        Commands::Purge => commands::purge::run(config, cli.format),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
