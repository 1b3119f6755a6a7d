use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use planrs::config::PlannerConfig;
use planrs::display;
use planrs::logging::{self, LogConfig};
use planrs::planner::{PlanInput, Planner};
use planrs::PaceEstimator;

/// planrs - Weekly Endurance-Training Planner CLI
///
/// Computes a "Norwegian singles" style training week from a weekly
/// distance goal and a reference race result.
#[derive(Parser)]
#[command(name = "planrs")]
#[command(author = "planrs Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Weekly endurance-training planner", long_about = None)]
struct Cli {
    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and display the weekly plan
    Plan {
        /// Weekly running distance goal in km
        #[arg(long)]
        weekly_km: Option<Decimal>,

        /// Reference race distance in km
        #[arg(long)]
        race_km: Option<Decimal>,

        /// Reference race finish time (MM:SS)
        #[arg(long)]
        race_time: Option<String>,

        /// Easy zone share of weekly time, percent
        #[arg(long)]
        easy: Option<Decimal>,

        /// Sub-threshold share of weekly time, percent
        #[arg(long)]
        subt: Option<Decimal>,

        /// High-intensity share of weekly time, percent
        #[arg(long)]
        hi: Option<Decimal>,

        /// Saturday runs high-intensity instead of a third sub-threshold day
        #[arg(long)]
        sat_hi: bool,

        /// Make Monday a rest day
        #[arg(long)]
        no_monday: bool,

        /// Make Friday a rest day
        #[arg(long)]
        no_friday: bool,

        /// Weekly cycling hours to overlay (enables the cycling overlay)
        #[arg(long)]
        cycling_hours: Option<Decimal>,

        /// Emit the full plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate training paces from a race result
    Paces {
        /// Race distance in km
        #[arg(long)]
        race_km: Decimal,

        /// Race finish time (MM:SS)
        #[arg(long)]
        race_time: String,

        /// Emit the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage planner defaults
    Config {
        /// List all configuration options
        #[arg(short, long)]
        list: bool,

        /// Set a configuration value (KEY=VALUE)
        #[arg(short, long)]
        set: Option<String>,

        /// Get a configuration value
        #[arg(short, long)]
        get: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&LogConfig::from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Plan {
            weekly_km,
            race_km,
            race_time,
            easy,
            subt,
            hi,
            sat_hi,
            no_monday,
            no_friday,
            cycling_hours,
            json,
        } => {
            let mut input = PlannerConfig::load()?.to_input();
            if let Some(v) = weekly_km {
                input.weekly_distance_km = v;
            }
            if let Some(v) = race_km {
                input.race_distance_km = v;
            }
            if let Some(v) = race_time {
                input.race_time_text = v;
            }
            if let Some(v) = easy {
                input.percentages.easy = v;
            }
            if let Some(v) = subt {
                input.percentages.sub_threshold = v;
            }
            if let Some(v) = hi {
                input.percentages.high_intensity = v;
            }
            if sat_hi {
                input.sat_high_intensity = true;
            }
            if no_monday {
                input.remove_monday = true;
            }
            if no_friday {
                input.remove_friday = true;
            }
            if let Some(hours) = cycling_hours {
                input.cycling_enabled = hours > Decimal::ZERO;
                input.cycling_hours_per_week = hours;
            }
            run_plan(&input, json)
        }

        Commands::Paces {
            race_km,
            race_time,
            json,
        } => run_paces(race_km, &race_time, json),

        Commands::Config { list, set, get } => run_config(list, set, get),
    }
}

fn run_plan(input: &PlanInput, json: bool) -> Result<()> {
    let output = match Planner::compute(input) {
        Ok(output) => output,
        Err(err) => anyhow::bail!("{}", err.user_message()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // Off-100 sums are accepted input, worth a notice but never an error
    if input.percentages.sum() != dec!(100) {
        println!(
            "{}",
            format!(
                "Note: zone percentages sum to {}%; the weekly goal is over- or undershot accordingly",
                input.percentages.sum()
            )
            .dimmed()
        );
    }

    println!("{}", display::render_estimate(&output.estimate));
    println!();
    println!("{}", display::render_week(&output.week));
    println!();
    println!("{}", display::render_totals(&output.totals));
    println!();
    println!("{}", display::render_chart(&output.chart));
    Ok(())
}

fn run_paces(race_km: Decimal, race_time: &str, json: bool) -> Result<()> {
    let estimate = match PaceEstimator::estimate(race_km, race_time) {
        Ok(estimate) => estimate,
        Err(err) => anyhow::bail!("{}", err.user_message()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{}", display::render_estimate(&estimate));
    }
    Ok(())
}

fn run_config(list: bool, set: Option<String>, get: Option<String>) -> Result<()> {
    let mut config = PlannerConfig::load()?;

    if list {
        for (key, value) in config.list() {
            println!("{:<24} {}", key, value);
        }
        return Ok(());
    }

    if let Some(assignment) = set {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got {:?}", assignment))?;
        config.set(key.trim(), value.trim())?;
        config.save()?;
        println!("{}", format!("✓ {} = {}", key.trim(), value.trim()).green());
        return Ok(());
    }

    if let Some(key) = get {
        match config.get(&key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!("unknown config key: {}", key),
        }
        return Ok(());
    }

    println!("Use --list, --get KEY or --set KEY=VALUE");
    Ok(())
}
