//! Accumulated intake state.
//!
//! One snapshot per in-progress onboarding session. Every field starts
//! unset and is filled in step by step; a step re-entered after backward
//! navigation simply overwrites its field. Snapshots are immutable from
//! the caller's point of view: each `with_*` builder consumes the old
//! snapshot and returns the new one, and `reset()` returns the initial
//! snapshot in a single step.
//!
//! The store performs no validation -- callers run the matching
//! validator first (see [`super::validate`] and [`super::nav`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// What the user wants out of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Reduce,
    Quit,
}

/// Everything collected across the intake screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeState {
    /// Reported daily consumption. Validated to be >= 20 at the boundary.
    pub puffs_per_day: Option<u32>,
    /// Reported monthly spend, in `currency` units.
    pub money_per_month: Option<f64>,
    pub currency: Option<CurrencyCode>,
    pub goal: Option<Goal>,
    /// Plan horizon in days.
    pub goal_speed_days: Option<u32>,
    /// Selected reasons for stopping. Order-irrelevant.
    pub why_stopped: Option<Vec<String>>,
    /// Selected worries. Order-irrelevant.
    pub worries: Option<Vec<String>>,
    /// Account-creation timestamp from the registration backend.
    /// Anchor for all date math; first write wins for the session.
    pub profile_created_at: Option<DateTime<Utc>>,
}

impl IntakeState {
    /// Initial snapshot with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_puffs(mut self, puffs_per_day: u32) -> Self {
        self.puffs_per_day = Some(puffs_per_day);
        self
    }

    pub fn with_money(mut self, money_per_month: f64) -> Self {
        self.money_per_month = Some(money_per_month);
        self
    }

    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_goal_speed(mut self, goal_speed_days: u32) -> Self {
        self.goal_speed_days = Some(goal_speed_days);
        self
    }

    pub fn with_why_stopped(mut self, reasons: Vec<String>) -> Self {
        self.why_stopped = Some(reasons);
        self
    }

    pub fn with_worries(mut self, worries: Vec<String>) -> Self {
        self.worries = Some(worries);
        self
    }

    /// Record the account-creation timestamp. The anchor is immutable
    /// within a session: once set, later writes are ignored.
    pub fn with_profile_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.profile_created_at.get_or_insert(created_at);
        self
    }

    /// Whether the registration backend has anchored this session.
    pub fn is_registered(&self) -> bool {
        self.profile_created_at.is_some()
    }

    /// The initial snapshot. Clears every field in one step.
    pub fn reset(self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn starts_with_every_field_unset() {
        let state = IntakeState::new();
        assert_eq!(state, IntakeState::default());
        assert!(state.puffs_per_day.is_none());
        assert!(state.profile_created_at.is_none());
        assert!(!state.is_registered());
    }

    #[test]
    fn builders_replace_unconditionally() {
        let state = IntakeState::new().with_puffs(100).with_puffs(60);
        assert_eq!(state.puffs_per_day, Some(60));

        // Re-entering the spend step overwrites both fields.
        let state = state
            .with_money(400.0)
            .with_currency(CurrencyCode::Mxn)
            .with_money(12_000.0)
            .with_currency(CurrencyCode::Crc);
        assert_eq!(state.money_per_month, Some(12_000.0));
        assert_eq!(state.currency, Some(CurrencyCode::Crc));
    }

    #[test]
    fn profile_created_at_first_write_wins() {
        let first = Utc.with_ymd_and_hms(2024, 3, 25, 10, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap();

        let state = IntakeState::new()
            .with_profile_created_at(first)
            .with_profile_created_at(second);
        assert_eq!(state.profile_created_at, Some(first));
    }

    #[test]
    fn reset_clears_every_field() {
        let created = Utc.with_ymd_and_hms(2024, 3, 25, 10, 0, 0).unwrap();
        let state = IntakeState::new()
            .with_puffs(100)
            .with_money(12_000.0)
            .with_currency(CurrencyCode::Crc)
            .with_goal(Goal::Quit)
            .with_goal_speed(10)
            .with_why_stopped(vec!["salud".into()])
            .with_worries(vec!["ansiedad".into()])
            .with_profile_created_at(created);

        assert_eq!(state.reset(), IntakeState::default());
    }

    #[test]
    fn goal_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Goal::Quit).unwrap(), "\"quit\"");
        assert_eq!(serde_json::to_string(&Goal::Reduce).unwrap(), "\"reduce\"");
    }
}
