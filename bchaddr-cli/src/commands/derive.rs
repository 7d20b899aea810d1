//! Watch-only derivation command.

use bchaddr::{AddressFormat, DerivationPath, Deriver};
use clap::{Args, ValueEnum};
use colored::Colorize;

/// Derive receiving addresses from an extended public key.
#[derive(Args)]
pub struct DeriveCommand {
    /// Base58Check-encoded extended public key (xpub/tpub).
    xpub: String,

    /// Derivation path, e.g. "0/5". Overrides --start/--count.
    #[arg(short, long)]
    path: Option<String>,

    /// First receiving index to derive.
    #[arg(long, default_value = "0")]
    start: u32,

    /// Number of consecutive receiving addresses.
    #[arg(short, long, default_value = "1")]
    count: u32,

    /// Output encoding.
    #[arg(short, long, value_enum, default_value = "cashaddr")]
    format: CliFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliFormat {
    /// Base58Check (starts with 1 or m)
    Legacy,
    /// CashAddr (bitcoincash:q...)
    Cashaddr,
}

impl From<CliFormat> for AddressFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Legacy => Self::Legacy,
            CliFormat::Cashaddr => Self::CashAddr,
        }
    }
}

impl DeriveCommand {
    /// Execute the derive command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let deriver = Deriver::from_xpub(&self.xpub)?;
        let format = AddressFormat::from(self.format);

        println!();
        println!("      {}  {}", "Network".cyan().bold(), deriver.network());

        if let Some(path) = &self.path {
            let parsed: DerivationPath = path.parse()?;
            let addr = deriver.derive(&parsed, format)?;
            println!("      {}     {}", "Path".cyan().bold(), parsed);
            println!("      {}  {}", "Address".cyan().bold(), addr.green());
        } else {
            let addresses = deriver.receiving_many(self.start, self.count, format)?;
            for (offset, addr) in addresses.iter().enumerate() {
                let index = self.start + offset as u32;
                println!("      {}     0/{}", "Path".cyan().bold(), index);
                println!("      {}  {}", "Address".cyan().bold(), addr.green());
            }
        }
        println!();
        Ok(())
    }
}
