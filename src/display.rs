//! Terminal presentation of a computed plan
//!
//! Thin rendering layer over the core output structures: the weekly
//! table, the totals block and the load-distribution bars. Nothing here
//! feeds back into the computation.

use chrono::Weekday;
use colored::Colorize;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::estimator::{format_pace, FitnessEstimate};
use crate::models::WeekPlan;
use crate::totals::{ChartPoint, Totals};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Sessions")]
    sessions: String,
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Render the weekly plan as a table
pub fn render_week(week: &WeekPlan) -> String {
    let rows: Vec<DayRow> = week
        .days
        .iter()
        .map(|day| DayRow {
            day: day_name(day.day).to_string(),
            sessions: if day.is_rest_day() {
                "Rest".to_string()
            } else {
                day.sessions
                    .iter()
                    .map(|s| s.describe())
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render the fitness estimate and formatted training paces
pub fn render_estimate(estimate: &FitnessEstimate) -> String {
    format!(
        "{}\n  Fitness score:  {}\n  Easy:           {}\n  Sub-threshold:  {}\n  High intensity: {}",
        "ESTIMATED TRAINING PACES".bold(),
        estimate.score.to_string().cyan(),
        format_pace(estimate.paces.easy),
        format_pace(estimate.paces.sub_threshold),
        format_pace(estimate.paces.high_intensity),
    )
}

/// Render the weekly totals block
pub fn render_totals(totals: &Totals) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "WEEKLY LOAD".bold()));
    for (label, zone) in [
        ("Easy", &totals.easy),
        ("Sub-threshold", &totals.sub_threshold),
        ("High intensity", &totals.high_intensity),
    ] {
        out.push_str(&format!(
            "  {:<15} {:>6.1} km {:>6.1} h\n",
            label,
            zone.distance_km,
            zone.time_minutes / dec!(60)
        ));
    }
    if totals.bike.total_hours() > Decimal::ZERO {
        out.push_str(&format!(
            "  {:<15} {:>16.1} h\n",
            "Cycling",
            totals.bike.total_hours()
        ));
    }
    out.push_str(&format!(
        "  {:<15} {:>16.1} h",
        "Total time".bold(),
        totals.total_time_minutes / dec!(60)
    ));
    out
}

/// Render the load-distribution series as horizontal bars
pub fn render_chart(series: &[ChartPoint]) -> String {
    let max_hours = series
        .iter()
        .map(|p| p.hours.to_f64().unwrap_or(0.0))
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(&format!("{}\n", "LOAD DISTRIBUTION".bold()));
    for point in series {
        let hours = point.hours.to_f64().unwrap_or(0.0);
        let width = if max_hours > 0.0 {
            ((hours / max_hours) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<15} {:<width$} {:>5.1} h\n",
            point.label,
            "█".repeat(width),
            point.hours,
            width = BAR_WIDTH
        ));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{PlanInput, Planner};

    fn sample_output() -> crate::planner::PlanOutput {
        let input = PlanInput {
            race_time_text: "40:00".to_string(),
            remove_monday: true,
            cycling_enabled: true,
            cycling_hours_per_week: dec!(10),
            ..Default::default()
        };
        Planner::compute(&input).unwrap()
    }

    #[test]
    fn test_render_week_includes_all_days() {
        let output = sample_output();
        let rendered = render_week(&output.week);
        for day in [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ] {
            assert!(rendered.contains(day), "missing {}", day);
        }
        // Removed Monday renders as a rest day
        assert!(rendered.contains("Rest"));
    }

    #[test]
    fn test_render_totals_mentions_cycling() {
        let output = sample_output();
        let rendered = render_totals(&output.totals);
        assert!(rendered.contains("Cycling"));
        assert!(rendered.contains("Total time"));
    }

    #[test]
    fn test_render_chart_has_bars() {
        let output = sample_output();
        let rendered = render_chart(&output.chart);
        assert!(rendered.contains("█"));
        assert!(rendered.contains("Easy"));
    }
}
