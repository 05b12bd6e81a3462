mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tflow_config::Config;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Optimize(args) => commands::optimize::handle(args, &config),
        cli::Commands::Mask { file, profile } => {
            commands::mask::handle(file.as_deref(), profile, &config)
        }
        cli::Commands::Tokens { file, method } => commands::tokens::handle(file.as_deref(), &method),
        cli::Commands::Savings => commands::savings::handle(&config),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
