//! The planning pipeline
//!
//! One immutable input struct goes in; a complete plan comes out, or a
//! typed error. The pipeline chains the estimator, allocator, scheduler
//! and aggregator; it is synchronous, side-effect-free and recomputed in
//! full on every call, so a newer input simply supersedes the previous
//! result. Callers own whatever mutable state feeds the input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocator::{ZoneAllocator, ZoneBudget};
use crate::error::{PlanError, Result};
use crate::estimator::{FitnessEstimate, PaceEstimator};
use crate::models::{WeekPlan, ZonePercentages};
use crate::scheduler::{ScheduleOptions, WeekScheduler};
use crate::totals::{ChartPoint, Totals, WeekAggregator};

/// Boundary input for one plan computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    /// Weekly running distance goal in kilometers
    pub weekly_distance_km: Decimal,
    /// Distance of the reference race in kilometers
    pub race_distance_km: Decimal,
    /// Race finish time as "MM:SS"
    pub race_time_text: String,
    pub percentages: ZonePercentages,
    pub sat_high_intensity: bool,
    pub remove_monday: bool,
    pub remove_friday: bool,
    pub cycling_enabled: bool,
    pub cycling_hours_per_week: Decimal,
}

impl Default for PlanInput {
    fn default() -> Self {
        PlanInput {
            weekly_distance_km: dec!(60),
            race_distance_km: dec!(10),
            race_time_text: "50:00".to_string(),
            percentages: ZonePercentages::default(),
            sat_high_intensity: false,
            remove_monday: false,
            remove_friday: false,
            cycling_enabled: false,
            cycling_hours_per_week: Decimal::ZERO,
        }
    }
}

impl PlanInput {
    pub fn schedule_options(&self) -> ScheduleOptions {
        ScheduleOptions {
            sat_high_intensity: self.sat_high_intensity,
            remove_monday: self.remove_monday,
            remove_friday: self.remove_friday,
            cycling_enabled: self.cycling_enabled,
            cycling_hours_per_week: self.cycling_hours_per_week,
        }
    }

    /// Boundary validation
    ///
    /// A zero or negative weekly distance is allowed (it yields a
    /// degenerate all-zero plan) and percentage sums are never checked
    /// against 100.
    pub fn validate(&self) -> Result<()> {
        if self.race_distance_km <= Decimal::ZERO {
            return Err(PlanError::Validation(format!(
                "race distance must be positive, got {} km",
                self.race_distance_km
            )));
        }
        if self.race_time_text.trim().is_empty() {
            return Err(PlanError::Validation("race time is empty".to_string()));
        }
        for (name, value) in [
            ("easy", self.percentages.easy),
            ("sub-threshold", self.percentages.sub_threshold),
            ("high-intensity", self.percentages.high_intensity),
        ] {
            if value < Decimal::ZERO {
                return Err(PlanError::Validation(format!(
                    "{} percentage must not be negative, got {}",
                    name, value
                )));
            }
        }
        if self.cycling_hours_per_week < Decimal::ZERO {
            return Err(PlanError::Validation(format!(
                "cycling hours must not be negative, got {}",
                self.cycling_hours_per_week
            )));
        }
        Ok(())
    }
}

/// Everything one computation produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutput {
    pub estimate: FitnessEstimate,
    pub budget: ZoneBudget,
    pub week: WeekPlan,
    pub totals: Totals,
    pub chart: Vec<ChartPoint>,
}

/// The estimator → allocator → scheduler → totals pipeline
pub struct Planner;

impl Planner {
    /// Compute a complete weekly plan from one input snapshot
    pub fn compute(input: &PlanInput) -> Result<PlanOutput> {
        input.validate()?;

        let estimate = PaceEstimator::estimate(input.race_distance_km, &input.race_time_text)?;
        debug!(score = estimate.score, "estimated fitness");

        let budget =
            ZoneAllocator::allocate(input.weekly_distance_km, &input.percentages, &estimate.paces);
        let week = WeekScheduler::schedule(&budget, &input.schedule_options());
        let totals = WeekAggregator::aggregate(&week, &estimate.paces);
        let chart = WeekAggregator::chart_series(&totals);

        Ok(PlanOutput {
            estimate,
            budget,
            week,
            totals,
            chart,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_compute_complete_output() {
        let input = PlanInput {
            race_time_text: "40:00".to_string(),
            ..Default::default()
        };
        let output = Planner::compute(&input).unwrap();

        assert_eq!(output.estimate.score, 40);
        assert_eq!(output.week.days.len(), 7);
        assert_eq!(output.chart.len(), 3);
        assert!(output.totals.total_time_minutes > Decimal::ZERO);
    }

    #[test]
    fn test_compute_rejects_bad_race_distance() {
        let input = PlanInput {
            race_distance_km: dec!(0),
            ..Default::default()
        };
        assert!(Planner::compute(&input).is_err());
    }

    #[test]
    fn test_compute_rejects_negative_percentage() {
        let mut input = PlanInput::default();
        input.percentages.easy = dec!(-5);
        assert!(matches!(
            Planner::compute(&input),
            Err(PlanError::Validation(_))
        ));
    }

    #[test]
    fn test_compute_surfaces_estimation_error() {
        let input = PlanInput {
            race_time_text: "xx:yy".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Planner::compute(&input),
            Err(PlanError::Estimation(_))
        ));
    }

    #[test]
    fn test_zero_weekly_distance_yields_degenerate_plan() {
        let input = PlanInput {
            weekly_distance_km: dec!(0),
            ..Default::default()
        };
        let output = Planner::compute(&input).unwrap();

        assert_eq!(output.budget.total_time_minutes, dec!(0));
        assert_eq!(output.week.days.len(), 7);
        // Sunday long run degrades to zero distance
        let sunday = output.week.day(Weekday::Sun).unwrap();
        assert_eq!(sunday.sessions[0].amount.value, dec!(0));
    }
}
