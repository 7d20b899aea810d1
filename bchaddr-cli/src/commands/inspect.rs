//! Address inspection command.

use bchaddr::address;
use clap::Args;
use colored::Colorize;

/// Show what kind of address a string is.
#[derive(Args)]
pub struct InspectCommand {
    /// Address to inspect.
    address: String,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let payload = address::decode(&self.address)?;
        let format = address::detect_format(&self.address)?;

        println!();
        println!("      {}   {}", "Format".cyan().bold(), format);
        println!("      {}  {}", "Network".cyan().bold(), payload.network);
        println!("      {}     {}", "Type".cyan().bold(), payload.script_type);
        println!(
            "      {}     {}",
            "Hash".cyan().bold(),
            hex::encode(payload.hash).dimmed()
        );
        println!();
        Ok(())
    }
}
