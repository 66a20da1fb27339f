//! Currency reference commands.

use clap::Subcommand;
use puffless_core::currency;
use puffless_core::pricing;
use puffless_core::CurrencyCode;

#[derive(Subcommand)]
pub enum CurrencyAction {
    /// List all supported currencies
    List,

    /// Show details for a specific currency
    Show {
        /// ISO 4217 code (e.g. "CRC", "MXN")
        code: String,
    },

    /// Estimate a localized price from a USD base price
    Price {
        /// Base price in USD
        base_usd: f64,
        /// Target currency code
        code: String,
    },
}

pub fn run(action: CurrencyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CurrencyAction::List => list(),
        CurrencyAction::Show { code } => show(&code),
        CurrencyAction::Price { base_usd, code } => price(base_usd, &code),
    }
}

fn list() -> Result<(), Box<dyn std::error::Error>> {
    println!("Supported currencies:");
    println!();
    println!("  {:<5} {:<4} {:>16} {:>14}", "code", "sym", "min monthly", "per 1 USD");
    for entry in currency::entries() {
        println!(
            "  {:<5} {:<4} {:>16} {:>14}",
            entry.code,
            entry.symbol,
            entry.minimum_amount,
            entry.rate_to_reference,
        );
    }
    Ok(())
}

fn show(code: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed: CurrencyCode = code.parse()?;
    let entry = currency::entry(parsed);

    println!("{} ({})", entry.code, entry.symbol);
    println!("  Minimum monthly spend: {}", entry.minimum_amount);
    println!("  Rate per 1 USD: {}", entry.rate_to_reference);
    Ok(())
}

fn price(base_usd: f64, code: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed: CurrencyCode = code.parse()?;
    let amount = pricing::localized_price(base_usd, parsed);

    println!(
        "${base_usd} USD is about {} (estimate; actual billing is handled by the subscription provider)",
        pricing::format_price(amount, parsed)
    );
    Ok(())
}
