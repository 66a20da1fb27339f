//! Guided intake flow.
//!
//! Drives the core wizard step by step over stdin. Rejected input keeps
//! the user on the same step; typing `back` returns to the previous
//! screen. Registration goes through the HTTP backend when a URL is
//! given, or a local stand-in for dry runs.

use std::io::{self, BufRead, Write};

use chrono::Utc;
use clap::Subcommand;
use puffless_core::backend::{DailyQuote, ProfileCreated};
use puffless_core::error::BackendError;
use puffless_core::{
    enter_plan_display, plan, pricing, CurrencyCode, DeviceState, Goal, HttpBackend,
    IntakeSession, IntakeState, PlanGate, ProfileService, StepId, StepInput, StepOutcome,
};

/// Reference monthly price of the premium subscription, in USD.
const PREMIUM_BASE_USD: f64 = 4.99;

#[derive(Subcommand)]
pub enum OnboardAction {
    /// Run the guided intake flow
    Run {
        /// Backend base URL; omit to register locally for a dry run
        #[arg(long)]
        backend_url: Option<String>,
    },
    /// Show whether this device has completed onboarding
    Status,
}

pub fn run(action: OnboardAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        OnboardAction::Run { backend_url } => run_wizard(backend_url),
        OnboardAction::Status => status(),
    }
}

fn status() -> Result<(), Box<dyn std::error::Error>> {
    let device = DeviceState::load()?;
    if device.onboarding_completed {
        println!("Onboarding completed on this device. The app would open at login.");
    } else {
        println!("Onboarding not completed. The app would open at step 1.");
    }
    Ok(())
}

/// Dry-run stand-in for the hosted backend.
struct LocalRegistration;

impl ProfileService for LocalRegistration {
    fn name(&self) -> &str {
        "local"
    }

    fn create_profile(&self, _intake: &IntakeState) -> Result<ProfileCreated, BackendError> {
        Ok(ProfileCreated { created_at: Utc::now() })
    }

    fn daily_quote(&self) -> Result<DailyQuote, BackendError> {
        Ok(DailyQuote {
            text: "Un día a la vez.".to_string(),
            author: "Puffless".to_string(),
        })
    }
}

fn run_wizard(backend_url: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut device = DeviceState::load_or_default();
    if device.onboarding_completed {
        println!("This device already completed onboarding; starting a fresh session anyway.");
    }
    println!("Type 'back' at any prompt to return to the previous step.");

    // The HTTP backend blocks on the ambient tokio runtime.
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let service: Box<dyn ProfileService> = match backend_url {
        Some(url) => Box::new(HttpBackend::new(url)),
        None => Box::new(LocalRegistration),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session = IntakeSession::new();

    loop {
        match session.current_step {
            StepId::Goal => {
                let answer = prompt(&mut input, "Goal -- [q]uit or [r]educe: ")?;
                if go_back(&mut session, &answer) {
                    continue;
                }
                let goal = match answer.to_lowercase().as_str() {
                    "q" | "quit" => Goal::Quit,
                    "r" | "reduce" => Goal::Reduce,
                    _ => {
                        println!("  Please answer 'q' or 'r'.");
                        continue;
                    }
                };
                apply(&mut session, StepInput::Goal(goal));
            }
            StepId::GoalSpeed => {
                let answer = prompt(&mut input, "Plan length in days: ")?;
                if go_back(&mut session, &answer) {
                    continue;
                }
                let Some(days) = parse_number(&answer) else {
                    continue;
                };
                apply(&mut session, StepInput::GoalSpeed(days));
            }
            StepId::Puffs => {
                let answer = prompt(&mut input, "Puffs per day: ")?;
                if go_back(&mut session, &answer) {
                    continue;
                }
                let Some(puffs) = parse_number(&answer) else {
                    continue;
                };
                apply(&mut session, StepInput::Puffs(puffs));
            }
            StepId::Spend => {
                let code = prompt(&mut input, "Currency code (e.g. CRC, MXN): ")?;
                if go_back(&mut session, &code) {
                    continue;
                }
                let currency: CurrencyCode = match code.parse() {
                    Ok(c) => c,
                    Err(e) => {
                        println!("  {e}");
                        continue;
                    }
                };
                let amount = prompt(&mut input, "Monthly spend on vaping: ")?;
                let amount: f64 = match amount.parse() {
                    Ok(a) => a,
                    Err(_) => {
                        println!("  Please enter a number.");
                        continue;
                    }
                };
                apply(&mut session, StepInput::Spend { amount, currency });
            }
            StepId::Comparison => {
                show_comparison(&session.state);
                let answer = prompt(&mut input, "Press Enter to continue")?;
                if go_back(&mut session, &answer) {
                    continue;
                }
                apply(&mut session, StepInput::ComparisonSeen);
            }
            StepId::Motivation => {
                let answer = prompt(&mut input, "Why do you want to stop (comma-separated): ")?;
                if go_back(&mut session, &answer) {
                    continue;
                }
                apply(&mut session, StepInput::Motivation(split_list(&answer)));
            }
            StepId::Worries => {
                let answer =
                    prompt(&mut input, "What worries you about stopping (comma-separated): ")?;
                if go_back(&mut session, &answer) {
                    continue;
                }
                apply(&mut session, StepInput::Worries(split_list(&answer)));
            }
            StepId::Registration | StepId::RegistrationReview => {
                println!("Creating your account via '{}'...", service.name());
                let created = service.create_profile(&session.state)?;
                apply(
                    &mut session,
                    StepInput::Registration { created_at: created.created_at },
                );
            }
            StepId::PlanDisplay => break,
        }
    }

    match enter_plan_display(&session.state) {
        PlanGate::Ready(summary) => {
            println!();
            println!("Your reduction plan:");
            print!("{}", plan::render_ascii_chart(&summary.chart_points));
            println!("Last puff: {}", summary.target_date_label);
        }
        PlanGate::Redirect(step) => {
            println!("Plan is not ready yet; returning to {step:?}.");
            return Ok(());
        }
    }

    match service.daily_quote() {
        Ok(quote) => {
            println!();
            println!("\"{}\" -- {}", quote.text, quote.author);
            device.cached_quote = Some(quote);
        }
        Err(e) => {
            eprintln!("Warning: could not fetch today's quote: {e}");
            if let Some(ref quote) = device.cached_quote {
                println!("\"{}\" -- {}", quote.text, quote.author);
            }
        }
    }

    device.onboarding_completed = true;
    device.save()?;
    session.reset();
    Ok(())
}

/// Print the outcome of one step; rejection keeps the cursor in place.
fn apply(session: &mut IntakeSession, input: StepInput) {
    if let StepOutcome::Rejected { reason } = session.apply(input) {
        println!("  {reason}");
    }
}

/// Handle the global 'back' keyword. Returns true when it consumed the
/// answer.
fn go_back(session: &mut IntakeSession, answer: &str) -> bool {
    if !answer.eq_ignore_ascii_case("back") {
        return false;
    }
    if !session.back() {
        println!("  Already at the first step.");
    }
    true
}

fn show_comparison(state: &IntakeState) {
    let (Some(money), Some(currency)) = (state.money_per_month, state.currency) else {
        return;
    };

    let outlook = plan::spend_outlook(money);
    println!();
    println!("Your vaping spend:");
    println!("  per day:   {}", pricing::format_price(outlook.per_day, currency));
    println!("  per month: {}", pricing::format_price(outlook.per_month, currency));
    println!("  per year:  {}", pricing::format_price(outlook.per_year, currency));
    println!(
        "Puffless Premium costs about {}/month.",
        pricing::format_price(pricing::localized_price(PREMIUM_BASE_USD, currency), currency)
    );
}

fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("input closed before the flow finished".into());
    }
    Ok(line.trim().to_string())
}

fn parse_number(answer: &str) -> Option<u32> {
    match answer.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("  Please enter a number.");
            None
        }
    }
}
