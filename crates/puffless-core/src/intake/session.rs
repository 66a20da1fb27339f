//! Intake session: a cursor over the step order plus the accumulated
//! snapshot, with a progress report for screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nav::{continue_with, StepId, StepInput, StepOutcome};
use super::state::IntakeState;

/// One onboarding run on one device.
///
/// Owns the current [`IntakeState`] snapshot and the step cursor. The
/// session lives for the duration of the flow and is not persisted; an
/// abandoned flow loses its progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeSession {
    /// Unique session identifier.
    pub id: String,
    /// When the session was started.
    pub started_at: DateTime<Utc>,
    /// Screen currently shown.
    pub current_step: StepId,
    /// Accumulated answers.
    pub state: IntakeState,
}

impl IntakeSession {
    /// Start a fresh session at the first screen.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            current_step: StepId::Goal,
            state: IntakeState::new(),
        }
    }

    /// Feed the current screen's input through the navigation
    /// controller. On acceptance the session adopts the new snapshot and
    /// moves its cursor; on rejection nothing changes and the caller
    /// re-prompts.
    pub fn apply(&mut self, input: StepInput) -> StepOutcome {
        let outcome = continue_with(self.state.clone(), input);
        if let StepOutcome::Accepted { state, next } = &outcome {
            self.state = state.clone();
            self.current_step = *next;
        }
        outcome
    }

    /// Move the cursor one screen back, if the current screen allows it.
    /// Collected answers stay in place; re-entering a step overwrites
    /// its field on the next accepted input.
    pub fn back(&mut self) -> bool {
        match self.current_step.previous() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Snapshot of how far the session has come.
    pub fn progress(&self) -> IntakeProgress {
        let answered = [
            self.state.goal.is_some(),
            self.state.goal_speed_days.is_some(),
            self.state.puffs_per_day.is_some(),
            self.state.money_per_month.is_some() && self.state.currency.is_some(),
            self.state.why_stopped.is_some(),
            self.state.worries.is_some(),
        ]
        .iter()
        .filter(|collected| **collected)
        .count();

        IntakeProgress {
            current_step: self.current_step,
            answered_steps: answered,
            total_steps: 6,
            is_registered: self.state.is_registered(),
        }
    }

    /// Wipe the session for a fresh run: initial snapshot, cursor on the
    /// first screen. Used after the generated plan has been shown, or
    /// when an abandoned flow is restarted.
    pub fn reset(&mut self) {
        self.state = IntakeState::new();
        self.current_step = StepId::Goal;
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress information for an intake session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeProgress {
    pub current_step: StepId,
    /// Input-collecting steps answered so far (comparison and
    /// registration are not counted; they collect nothing).
    pub answered_steps: usize,
    pub total_steps: usize,
    pub is_registered: bool,
}
