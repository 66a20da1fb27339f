//! Reduction-plan preview commands.

use chrono::Utc;
use clap::Subcommand;
use puffless_core::plan;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Preview the reduction curve for a rate and horizon, anchored at
    /// today's date
    Preview {
        /// Current puffs per day
        puffs: u32,
        /// Plan horizon in days
        days: u32,
        /// Chart point budget
        #[arg(long, default_value_t = plan::MAX_CHART_POINTS)]
        max_points: usize,
        /// Print the sampled points as JSON instead of a chart
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Preview { puffs, days, max_points, json } => {
            preview(puffs, days, max_points, json)
        }
    }
}

fn preview(
    puffs: u32,
    days: u32,
    max_points: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let curve = plan::build_reduction_curve(puffs, days);
    if curve.is_empty() && !json {
        println!("Nothing to plan: rate and horizon must both be above zero.");
        return Ok(());
    }

    let chart = plan::sample(&curve, max_points);
    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    print!("{}", plan::render_ascii_chart(&chart));
    println!(
        "{} of {} days shown. Target date: {}",
        chart.len(),
        curve.len(),
        plan::target_date_label(Utc::now(), days)
    );
    Ok(())
}
