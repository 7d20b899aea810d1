//! CLI command definitions and handlers.

mod convert;
mod derive;
mod inspect;

use clap::{Parser, Subcommand};
pub use convert::ConvertCommand;
pub use derive::DeriveCommand;
pub use inspect::InspectCommand;

/// bchaddr - Bitcoin Cash address conversion and watch-only derivation.
#[derive(Parser)]
#[command(name = "bchaddr")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert an address between legacy and CashAddr.
    Convert(ConvertCommand),

    /// Show the format, network, and script type of an address.
    Inspect(InspectCommand),

    /// Derive receiving addresses from an extended public key.
    Derive(DeriveCommand),
}
