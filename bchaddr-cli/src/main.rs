//! bchaddr - Bitcoin Cash address conversion and watch-only derivation.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Convert(cmd) => cmd.execute()?,
        Commands::Inspect(cmd) => cmd.execute()?,
        Commands::Derive(cmd) => cmd.execute()?,
    }
    Ok(())
}
