//! Normview CLI: the `normview` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Flavours {
            document,
            config,
            json,
        } => commands::flavours::run(document, config, json),

        Commands::Table {
            document,
            flavour,
            config,
            json,
        } => commands::table::run(commands::table::Args {
            document,
            flavour,
            config,
            json,
        }),

        Commands::Crush {
            document,
            rows,
            json,
        } => commands::crush::run(document, rows, json),
    }
}
