//! Salescope CLI - monthly sales report generator.

mod cli;
mod commands;
mod console;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            config,
        } => commands::run::run(input, output, config, cli.verbose),

        Commands::Report {
            file,
            output,
            config,
        } => commands::report::run(file, output, config, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
