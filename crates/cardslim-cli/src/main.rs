mod commands;
mod output;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;

use commands::lookup::LookupArgs;

/// Slim a full card catalog into its runtime projection
#[derive(Parser)]
#[command(
    name = "cardslim",
    version,
    about = "Slim a full card catalog into its runtime projection",
    long_about = "Reads cards-full.json from the current directory, keeps only the \
                  name, pretty name, and identifier of every card, and prints the \
                  slimmed catalog as compact JSON on stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the full catalog down to name/pretty_name/id (the default)
    Slim,
    /// Look up a card's pretty name in a slimmed catalog
    Lookup(LookupArgs),
    /// Print version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> =
        match cli.command.unwrap_or(Commands::Slim) {
            Commands::Slim => commands::slim::run_slim(),
            Commands::Lookup(args) => commands::lookup::run_lookup(args),
            Commands::Version => {
                println!("cardslim {}", env!("CARGO_PKG_VERSION"));
                return;
            }
        };

    match result {
        Ok(value) => {
            output::print_value(&value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
