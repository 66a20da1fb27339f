use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "puffless-cli", version, about = "Puffless CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Guided onboarding flow
    Onboard {
        #[command(subcommand)]
        action: commands::onboard::OnboardAction,
    },
    /// Reduction-plan preview
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Currency reference data and price estimates
    Currency {
        #[command(subcommand)]
        action: commands::currency::CurrencyAction,
    },
    /// Device-state management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Onboard { action } => commands::onboard::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Currency { action } => commands::currency::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
