//! # Puffless Core Library
//!
//! Core business logic for Puffless, a vaping-cessation planner for
//! LATAM markets. The library follows a CLI-first philosophy: every
//! operation is available through the standalone CLI binary, and any
//! GUI shell is a thin layer over this same crate.
//!
//! ## Architecture
//!
//! - **Intake wizard**: an accumulating state machine collecting the
//!   cessation-plan parameters screen by screen, with per-step
//!   validation and guarded navigation
//! - **Plan engine**: deterministic, pure computation of the day-by-day
//!   reduction curve, its chart downsampling, and the target date
//! - **Currency table**: per-market minimum spend, symbols, and static
//!   exchange rates for price estimates
//! - **Storage**: TOML-based device-local state (onboarding flag,
//!   cached quote)
//! - **Backend**: trait boundary for account creation and the daily
//!   quote, with an HTTP implementation
//!
//! ## Key Components
//!
//! - [`IntakeSession`]: wizard session over the step order
//! - [`continue_with`]: validated step transition
//! - [`enter_plan_display`]: guard for the terminal plan screen
//! - [`plan::build_reduction_curve`]: the reduction-curve generator
//! - [`DeviceState`]: device-local persistence

pub mod backend;
pub mod currency;
pub mod error;
pub mod intake;
pub mod plan;
pub mod pricing;
pub mod storage;

pub use backend::{DailyQuote, HttpBackend, ProfileCreated, ProfileService};
pub use currency::{CurrencyCode, CurrencyEntry, REFERENCE_CURRENCY};
pub use error::{BackendError, ConfigError, CoreError};
pub use intake::{
    continue_with, enter_plan_display, Goal, IntakeProgress, IntakeSession, IntakeState,
    PlanGate, RejectReason, StepId, StepInput, StepOutcome,
};
pub use plan::{DailyPlanPoint, PlanSummary, SpendOutlook, MAX_CHART_POINTS};
pub use storage::DeviceState;
