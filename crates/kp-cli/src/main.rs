//! Playable demo CLI for the Kopeck command interpreter.

mod demo;
mod session;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kopeck",
    about = "Kopeck — a text-command interpreter for turn-based interactive fiction",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the built-in demo scenario
    Play,

    /// Interpret a single line and print the structured result
    Parse {
        /// The input line (remaining arguments are joined with spaces)
        #[arg(trailing_var_arg = true, required = true)]
        line: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play => session::run(),
        Commands::Parse { line } => session::parse_line(&line.join(" ")),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
