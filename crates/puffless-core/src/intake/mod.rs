//! Intake wizard: accumulated state, per-step validation, and guarded
//! navigation.
//!
//! The wizard collects one field per screen into an [`IntakeState`]
//! snapshot. Screens never mutate state directly: they feed user input
//! to [`continue_with`], which validates, produces the next snapshot,
//! and names the next step. The terminal plan screen is guarded by
//! [`enter_plan_display`].

pub mod nav;
pub mod session;
pub mod state;
pub mod validate;

pub use nav::{
    continue_with, enter_plan_display, PlanGate, RejectReason, StepId, StepInput, StepOutcome,
};
pub use session::{IntakeProgress, IntakeSession};
pub use state::{Goal, IntakeState};
