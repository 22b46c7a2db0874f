//! Campaign planning CLI
//!
//! Loads a campaign TOML document, validates it, replays every scenario, and
//! prints a cost/time report. `--optimize` appends the optimizer's plan as
//! an extra scenario so it can be compared against the hand-built ones.
//!
//! # Usage
//! ```bash
//! rigplan --campaign well-7.toml --optimize
//! RIGPLAN_CAMPAIGN=well-7.toml rigplan --json
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use rigplan::config::CampaignFile;
use rigplan::simulator::describe_sequence;
use rigplan::{
    optimize, sequence_capacity, simulate_scenario, validate_campaign, Scenario, ScenarioResult,
    ScenarioStatus,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "rigplan")]
#[command(about = "Drilling campaign simulator and bit-sequence optimizer")]
#[command(version)]
struct Args {
    /// Campaign file (TOML); falls back to $RIGPLAN_CAMPAIGN, then ./campaign.toml
    #[arg(short, long, value_name = "PATH")]
    campaign: Option<PathBuf>,

    /// Search for the lowest-cost plan and append it as an extra scenario
    #[arg(short, long)]
    optimize: bool,

    /// Print the full timeline for every scenario
    #[arg(long)]
    steps: bool,

    /// Emit scenario results as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,rigplan=info")),
        )
        .init();

    let args = Args::parse();

    let file = CampaignFile::locate_and_load(args.campaign.as_deref())
        .context("could not load a campaign file")?;

    let warnings =
        validate_campaign(&file.parameters, &file.bits).context("campaign failed validation")?;
    for warning in &warnings {
        tracing::warn!(field = %warning.field, "{warning}");
    }

    let mut results: Vec<ScenarioResult> = file
        .scenarios()
        .iter()
        .map(|scenario| simulate_scenario(&file.parameters, &file.bits, scenario))
        .collect();

    if args.optimize {
        let plan = optimize(&file.parameters, &file.bits);
        if plan.is_empty() {
            tracing::warn!("optimizer produced no plan — no active bits or nothing left to drill");
        } else {
            let scenario = Scenario {
                id: "optimized".to_string(),
                name: format!("Optimized · {}", describe_sequence(&file.bits, &plan)),
                sequence: plan,
            };
            results.push(simulate_scenario(&file.parameters, &file.bits, &scenario));
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_report(&file, &results, args.steps);
    Ok(())
}

// ============================================================================
// Text Report
// ============================================================================

fn print_report(file: &CampaignFile, results: &[ScenarioResult], with_steps: bool) {
    let params = &file.parameters;
    let title = if file.campaign.name.is_empty() {
        "Drilling campaign"
    } else {
        &file.campaign.name
    };

    println!("══════════════════════════════════════════════════════════════");
    println!("  {title}");
    if !file.campaign.well.is_empty() {
        println!("  Well: {}", file.campaign.well);
    }
    println!(
        "  Interval: {:.0} → {:.0}  ({:.0} to drill)",
        params.start_depth,
        params.target_depth(),
        params.interval_to_drill
    );
    println!(
        "  Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
    println!("══════════════════════════════════════════════════════════════");

    for result in results {
        let badge = match result.status {
            ScenarioStatus::Complete => "✓",
            ScenarioStatus::Incomplete => "✗",
        };
        println!();
        println!("{badge} {}  [{}]", result.name, result.status);
        println!(
            "    time {:>9.1} h ({:.1} days)   cost {:>12.0}   cost/len {:>8.1}",
            result.total_time_hours,
            result.total_time_hours / 24.0,
            result.total_cost,
            result.cost_per_unit_depth
        );

        let runs: Vec<String> = result
            .bits_used
            .iter()
            .map(|(name, count)| format!("{name} ×{count}"))
            .collect();
        if !runs.is_empty() {
            println!("    runs: {}", runs.join(", "));
        }

        if result.status == ScenarioStatus::Incomplete {
            let scenario = file
                .scenarios()
                .into_iter()
                .find(|s| s.id == result.id);
            if let Some(scenario) = scenario {
                let capacity = sequence_capacity(&file.bits, &scenario.sequence);
                println!(
                    "    short by {:.0}: plan capacity {:.0} < interval {:.0}",
                    params.interval_to_drill - capacity,
                    capacity,
                    params.interval_to_drill
                );
            }
        }

        if with_steps {
            println!(
                "    {:<12} {:>10} {:>10} {:>12}  {}",
                "activity", "depth", "hours", "cost", "bit"
            );
            for step in &result.steps {
                println!(
                    "    {:<12} {:>10.1} {:>10.1} {:>12.0}  {}",
                    step.activity.to_string(),
                    step.depth,
                    step.elapsed_hours,
                    step.cumulative_cost,
                    step.bit_name.as_deref().unwrap_or("-")
                );
            }
        }
    }
    println!();
}
