//! Address conversion command.

use bchaddr::address;
use clap::{Args, ValueEnum};
use colored::Colorize;

/// Convert an address to the requested encoding.
#[derive(Args)]
pub struct ConvertCommand {
    /// Address to convert (legacy or CashAddr, prefixed or not).
    address: String,

    /// Target encoding.
    #[arg(short, long, value_enum, default_value = "cashaddr")]
    to: TargetFormat,

    /// Omit the network prefix from CashAddr output.
    #[arg(long)]
    no_prefix: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetFormat {
    /// Base58Check (starts with 1, 3, or m)
    Legacy,
    /// CashAddr (bitcoincash:q...)
    Cashaddr,
}

impl ConvertCommand {
    /// Execute the convert command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let converted = match self.to {
            TargetFormat::Legacy => address::to_legacy_address(&self.address)?,
            TargetFormat::Cashaddr => address::to_cash_address(&self.address, !self.no_prefix)?,
        };
        println!("{}", converted.green());
        Ok(())
    }
}
