//! Device-state commands.

use clap::Subcommand;
use puffless_core::DeviceState;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show device state
    Show,
    /// Reset device state to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Reset => reset(),
    }
}

fn show() -> Result<(), Box<dyn std::error::Error>> {
    let device = DeviceState::load()?;
    println!("onboarding_completed: {}", device.onboarding_completed);
    match device.cached_quote {
        Some(quote) => println!("cached_quote: \"{}\" -- {}", quote.text, quote.author),
        None => println!("cached_quote: (none)"),
    }
    Ok(())
}

fn reset() -> Result<(), Box<dyn std::error::Error>> {
    DeviceState::default().save()?;
    println!("Device state reset.");
    Ok(())
}
