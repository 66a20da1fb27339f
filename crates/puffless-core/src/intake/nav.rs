//! Step navigation: validated forward movement and the plan-screen guard.
//!
//! Steps form a fixed linear order. Each screen hands its raw input to
//! [`continue_with`]; invalid input produces [`StepOutcome::Rejected`]
//! with no state change and no navigation (the screen re-prompts), valid
//! input produces the next snapshot plus the next [`StepId`]. The
//! terminal plan screen is entered through [`enter_plan_display`], which
//! redirects to the registration-review step when the anchor date or the
//! horizon is missing -- before any plan computation is attempted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::{Goal, IntakeState};
use super::validate;
use crate::currency::{self, CurrencyCode};
use crate::plan::{self, PlanSummary};

/// Identifier of an intake screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Goal,
    GoalSpeed,
    Puffs,
    Spend,
    Comparison,
    Motivation,
    Worries,
    Registration,
    /// Review screen shown before (re-)attempting registration; also the
    /// guard's redirect target when the plan screen cannot render.
    RegistrationReview,
    PlanDisplay,
}

impl StepId {
    /// Next step in the fixed linear order.
    pub fn next(self) -> StepId {
        match self {
            StepId::Goal => StepId::GoalSpeed,
            StepId::GoalSpeed => StepId::Puffs,
            StepId::Puffs => StepId::Spend,
            StepId::Spend => StepId::Comparison,
            StepId::Comparison => StepId::Motivation,
            StepId::Motivation => StepId::Worries,
            StepId::Worries => StepId::Registration,
            StepId::Registration => StepId::PlanDisplay,
            StepId::RegistrationReview => StepId::Registration,
            StepId::PlanDisplay => StepId::PlanDisplay,
        }
    }

    /// Previous step for backward navigation. `None` at the first step
    /// and on the terminal screens, which are not navigated back from.
    pub fn previous(self) -> Option<StepId> {
        match self {
            StepId::Goal => None,
            StepId::GoalSpeed => Some(StepId::Goal),
            StepId::Puffs => Some(StepId::GoalSpeed),
            StepId::Spend => Some(StepId::Puffs),
            StepId::Comparison => Some(StepId::Spend),
            StepId::Motivation => Some(StepId::Comparison),
            StepId::Worries => Some(StepId::Motivation),
            StepId::Registration => Some(StepId::Worries),
            StepId::RegistrationReview => None,
            StepId::PlanDisplay => None,
        }
    }
}

/// Raw user input for one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    Goal(Goal),
    GoalSpeed(u32),
    Puffs(u32),
    Spend { amount: f64, currency: CurrencyCode },
    /// The comparison screen is acknowledgement-only.
    ComparisonSeen,
    Motivation(Vec<String>),
    Worries(Vec<String>),
    /// Creation timestamp handed back by the registration backend.
    Registration { created_at: DateTime<Utc> },
}

impl StepInput {
    /// The step this input belongs to.
    pub fn step(&self) -> StepId {
        match self {
            StepInput::Goal(_) => StepId::Goal,
            StepInput::GoalSpeed(_) => StepId::GoalSpeed,
            StepInput::Puffs(_) => StepId::Puffs,
            StepInput::Spend { .. } => StepId::Spend,
            StepInput::ComparisonSeen => StepId::Comparison,
            StepInput::Motivation(_) => StepId::Motivation,
            StepInput::Worries(_) => StepId::Worries,
            StepInput::Registration { .. } => StepId::Registration,
        }
    }
}

/// Why a step rejected its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RejectReason {
    PuffsBelowMinimum { value: u32, minimum: u32 },
    SpendBelowMinimum { amount: f64, minimum: f64, currency: CurrencyCode },
    HorizonTooShort { days: u32, minimum: u32 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::PuffsBelowMinimum { value, minimum } => {
                write!(f, "{value} puffs/day is below the minimum of {minimum}")
            }
            RejectReason::SpendBelowMinimum { amount, minimum, currency } => {
                write!(f, "{amount} {currency} is below the minimum of {minimum} {currency}")
            }
            RejectReason::HorizonTooShort { days, minimum } => {
                write!(f, "a {days}-day horizon is below the minimum of {minimum}")
            }
        }
    }
}

/// Result of feeding input to a step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Input accepted: the updated snapshot and the screen to show next.
    Accepted { state: IntakeState, next: StepId },
    /// Input rejected: no state change, no navigation; re-prompt.
    Rejected { reason: RejectReason },
}

impl StepOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, StepOutcome::Accepted { .. })
    }
}

/// Validate `input`, fold it into `state`, and name the next step.
pub fn continue_with(state: IntakeState, input: StepInput) -> StepOutcome {
    let next = input.step().next();

    let state = match input {
        StepInput::Goal(goal) => state.with_goal(goal),
        StepInput::GoalSpeed(days) => {
            if !validate::is_valid_goal_speed(days) {
                return StepOutcome::Rejected {
                    reason: RejectReason::HorizonTooShort {
                        days,
                        minimum: validate::MIN_GOAL_SPEED_DAYS,
                    },
                };
            }
            state.with_goal_speed(days)
        }
        StepInput::Puffs(value) => {
            if !validate::is_valid_puff_count(value) {
                return StepOutcome::Rejected {
                    reason: RejectReason::PuffsBelowMinimum {
                        value,
                        minimum: validate::MIN_PUFFS_PER_DAY,
                    },
                };
            }
            state.with_puffs(value)
        }
        StepInput::Spend { amount, currency: code } => {
            if !validate::is_valid_monthly_spend(amount, code.as_str()) {
                return StepOutcome::Rejected {
                    reason: RejectReason::SpendBelowMinimum {
                        amount,
                        minimum: currency::entry(code).minimum_amount,
                        currency: code,
                    },
                };
            }
            state.with_money(amount).with_currency(code)
        }
        StepInput::ComparisonSeen => state,
        StepInput::Motivation(reasons) => state.with_why_stopped(reasons),
        StepInput::Worries(worries) => state.with_worries(worries),
        StepInput::Registration { created_at } => state.with_profile_created_at(created_at),
    };

    StepOutcome::Accepted { state, next }
}

/// Entry decision for the plan screen.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanGate {
    /// Both prerequisites present; the computed plan is ready to render.
    Ready(PlanSummary),
    /// A prerequisite is missing; show this step instead.
    Redirect(StepId),
}

/// Guard the plan screen: without both the horizon and the anchor date
/// the plan cannot be computed, so the controller redirects to the
/// registration-review step instead of rendering.
pub fn enter_plan_display(state: &IntakeState) -> PlanGate {
    if state.goal_speed_days.is_some() && state.profile_created_at.is_some() {
        if let Some(summary) = plan::plan_summary(state) {
            return PlanGate::Ready(summary);
        }
    }
    PlanGate::Redirect(StepId::RegistrationReview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 25, 12, 0, 0).unwrap()
    }

    #[test]
    fn forward_order_is_fixed() {
        let order = [
            StepId::Goal,
            StepId::GoalSpeed,
            StepId::Puffs,
            StepId::Spend,
            StepId::Comparison,
            StepId::Motivation,
            StepId::Worries,
            StepId::Registration,
            StepId::PlanDisplay,
        ];
        for pair in order.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
    }

    #[test]
    fn previous_walks_the_order_backward() {
        assert_eq!(StepId::Goal.previous(), None);
        assert_eq!(StepId::Worries.previous(), Some(StepId::Motivation));
        assert_eq!(StepId::Spend.previous(), Some(StepId::Puffs));
    }

    #[test]
    fn registration_review_leads_back_to_registration() {
        assert_eq!(StepId::RegistrationReview.next(), StepId::Registration);
    }

    #[test]
    fn accepted_input_advances_and_updates_state() {
        let outcome = continue_with(IntakeState::new(), StepInput::Goal(Goal::Quit));
        match outcome {
            StepOutcome::Accepted { state, next } => {
                assert_eq!(state.goal, Some(Goal::Quit));
                assert_eq!(next, StepId::GoalSpeed);
            }
            StepOutcome::Rejected { .. } => panic!("goal input is always accepted"),
        }
    }

    #[test]
    fn low_puff_count_is_rejected_without_mutation() {
        let outcome = continue_with(IntakeState::new(), StepInput::Puffs(19));
        assert_eq!(
            outcome,
            StepOutcome::Rejected {
                reason: RejectReason::PuffsBelowMinimum { value: 19, minimum: 20 }
            }
        );
    }

    #[test]
    fn spend_below_currency_minimum_is_rejected() {
        let outcome = continue_with(
            IntakeState::new(),
            StepInput::Spend { amount: 9_999.0, currency: CurrencyCode::Crc },
        );
        match outcome {
            StepOutcome::Rejected { reason: RejectReason::SpendBelowMinimum { minimum, .. } } => {
                assert_eq!(minimum, 10_000.0);
            }
            other => panic!("expected spend rejection, got {other:?}"),
        }
    }

    #[test]
    fn spend_at_currency_minimum_is_accepted() {
        let outcome = continue_with(
            IntakeState::new(),
            StepInput::Spend { amount: 10_000.0, currency: CurrencyCode::Crc },
        );
        match outcome {
            StepOutcome::Accepted { state, next } => {
                assert_eq!(state.money_per_month, Some(10_000.0));
                assert_eq!(state.currency, Some(CurrencyCode::Crc));
                assert_eq!(next, StepId::Comparison);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn zero_day_horizon_is_rejected() {
        let outcome = continue_with(IntakeState::new(), StepInput::GoalSpeed(0));
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn comparison_step_is_acknowledgement_only() {
        let state = IntakeState::new().with_money(12_000.0);
        let outcome = continue_with(state.clone(), StepInput::ComparisonSeen);
        assert_eq!(outcome, StepOutcome::Accepted { state, next: StepId::Motivation });
    }

    #[test]
    fn guard_redirects_when_anchor_is_missing() {
        let state = IntakeState::new().with_puffs(100).with_goal_speed(10);
        assert_eq!(
            enter_plan_display(&state),
            PlanGate::Redirect(StepId::RegistrationReview)
        );
    }

    #[test]
    fn guard_redirects_when_horizon_is_missing() {
        let state = IntakeState::new()
            .with_puffs(100)
            .with_profile_created_at(created_at());
        assert_eq!(
            enter_plan_display(&state),
            PlanGate::Redirect(StepId::RegistrationReview)
        );
    }

    #[test]
    fn guard_opens_with_both_prerequisites() {
        let state = IntakeState::new()
            .with_puffs(100)
            .with_goal_speed(10)
            .with_profile_created_at(created_at());
        match enter_plan_display(&state) {
            PlanGate::Ready(summary) => {
                assert_eq!(summary.chart_points.len(), 10);
                assert_eq!(summary.chart_points[0].remaining_puffs, 100);
            }
            PlanGate::Redirect(_) => panic!("guard should open"),
        }
    }

    #[test]
    fn reject_reasons_render_for_reprompts() {
        let reason = RejectReason::SpendBelowMinimum {
            amount: 9_999.0,
            minimum: 10_000.0,
            currency: CurrencyCode::Crc,
        };
        assert_eq!(reason.to_string(), "9999 CRC is below the minimum of 10000 CRC");
    }
}
