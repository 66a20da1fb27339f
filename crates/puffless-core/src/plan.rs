//! Deterministic reduction-plan engine.
//!
//! Given the finalized intake values and the account-creation timestamp,
//! this module computes:
//! - a day-by-day reduction curve from the reported rate down to zero
//! - a downsampled subset of that curve for compact chart display
//! - the target completion date and its localized display label
//!
//! Everything here is pure: identical inputs always produce identical
//! output, and degenerate inputs produce an empty result rather than an
//! error. Callers gate entry on the required fields (see
//! [`crate::intake::enter_plan_display`]); there is no failure path
//! inside the engine itself.

use chrono::{DateTime, Days, Locale, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::intake::IntakeState;

/// Chart budget used for the plan screen.
pub const MAX_CHART_POINTS: usize = 14;

/// One day of the reduction curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlanPoint {
    pub day_index: u32,
    pub remaining_puffs: u32,
}

/// Linear reduction curve from `puffs_per_day` toward zero over `days`.
///
/// `remaining = round(puffs * (1 - i/days))` for `i` in `[0, days)`,
/// clamped at zero. Degenerate input (`days == 0` or
/// `puffs_per_day == 0`) yields an empty curve.
pub fn build_reduction_curve(puffs_per_day: u32, days: u32) -> Vec<DailyPlanPoint> {
    if puffs_per_day == 0 || days == 0 {
        return Vec::new();
    }

    (0..days)
        .map(|i| {
            let remaining =
                f64::from(puffs_per_day) * (1.0 - f64::from(i) / f64::from(days));
            DailyPlanPoint {
                day_index: i,
                remaining_puffs: remaining.max(0.0).round() as u32,
            }
        })
        .collect()
}

/// Downsample `curve` to roughly `max_points` entries.
///
/// Keeps every point whose index is a multiple of
/// `stride = ceil(len / max_points)`, so index 0 is always kept. The
/// stride rule can return fewer points than the budget for some
/// length/budget ratios; that coarse selection is part of the chart's
/// output contract and must not be replaced with an evenly-spaced
/// resample. A curve within budget (or a zero budget) is returned
/// unchanged.
pub fn sample(curve: &[DailyPlanPoint], max_points: usize) -> Vec<DailyPlanPoint> {
    if max_points == 0 || curve.len() <= max_points {
        return curve.to_vec();
    }

    let stride = curve.len().div_ceil(max_points);
    curve
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(_, p)| *p)
        .collect()
}

/// Calendar date `goal_speed_days` days after the account creation
/// timestamp. Saturates at the calendar boundary instead of panicking.
pub fn target_date(created_at: DateTime<Utc>, goal_speed_days: u32) -> NaiveDate {
    let start = created_at.date_naive();
    start
        .checked_add_days(Days::new(u64::from(goal_speed_days)))
        .unwrap_or(start)
}

/// Long localized label for the target date: day, full month name, year.
pub fn target_date_label(created_at: DateTime<Utc>, goal_speed_days: u32) -> String {
    target_date(created_at, goal_speed_days)
        .format_localized("%-d de %B de %Y", Locale::es_ES)
        .to_string()
}

/// What the terminal plan screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub target_date_label: String,
    pub chart_points: Vec<DailyPlanPoint>,
}

/// Build the display plan from a finalized intake snapshot.
///
/// Returns `None` when the anchor date or the horizon is missing --
/// exactly the cases where the navigation guard redirects instead of
/// rendering. A missing puff rate is not a guard condition; it produces
/// an empty chart (degenerate input, rendered as an empty state).
pub fn plan_summary(state: &IntakeState) -> Option<PlanSummary> {
    let created_at = state.profile_created_at?;
    let days = state.goal_speed_days?;

    let curve = build_reduction_curve(state.puffs_per_day.unwrap_or(0), days);
    Some(PlanSummary {
        target_date_label: target_date_label(created_at, days),
        chart_points: sample(&curve, MAX_CHART_POINTS),
    })
}

/// What the reported monthly spend amounts to over time. Shown on the
/// comparison step between the spend and motivation screens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendOutlook {
    pub per_day: f64,
    pub per_month: f64,
    pub per_year: f64,
}

/// Project the reported monthly spend to daily and yearly figures.
pub fn spend_outlook(money_per_month: f64) -> SpendOutlook {
    SpendOutlook {
        per_day: money_per_month / 30.0,
        per_month: money_per_month,
        per_year: money_per_month * 12.0,
    }
}

/// Render the chart points as an ASCII bar chart.
pub fn render_ascii_chart(points: &[DailyPlanPoint]) -> String {
    let Some(max) = points.iter().map(|p| p.remaining_puffs).max().filter(|m| *m > 0) else {
        return "(no reduction data)\n".to_string();
    };

    let mut output = String::new();
    output.push_str(&"─".repeat(50));
    output.push('\n');
    for point in points {
        let bar_length = (point.remaining_puffs * 30 / max) as usize;
        let bar = "█".repeat(bar_length);
        output.push_str(&format!(
            "día {:>3} {:<30} {}\n",
            point.day_index, bar, point.remaining_puffs
        ));
    }
    output.push_str(&"─".repeat(50));
    output.push('\n');
    output
}
