//! Greeter CLI - time-of-day labels and user name export

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, daypart, export};

/// Greeter - time-of-day labels and user name export
#[derive(Parser)]
#[command(name = "greet", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the daypart label for an hour
    Daypart {
        /// Hour of day (0-23); defaults to the current hour
        #[arg(long)]
        hour: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a user's name to a file
    Export {
        /// User ID to look up
        id: i64,
        /// Destination file
        file: PathBuf,
    },

    /// Add or update a user
    Add {
        /// User ID
        id: i64,
        /// Display name
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Daypart { hour, json } => daypart::run(hour, json),
        Commands::Export { id, file } => export::run(id, &file),
        Commands::Add { id, name } => add::run(id, &name),
    }
}
