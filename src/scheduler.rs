//! Weekly schedule construction
//!
//! Distributes zone budgets across the seven fixed calendar slots under
//! the day-role rules: Tuesday and Thursday are always sub-threshold
//! days, Saturday is either a third sub-threshold day or the
//! high-intensity day, Sunday carries the long run, and every intensity
//! session is bracketed by fixed warmup/cooldown blocks. A pure function
//! of (budget, options); no day depends on another except through the
//! shared budgets and day-count divisors computed up front.

use chrono::Weekday;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::allocator::ZoneBudget;
use crate::models::{DayPlan, Session, SessionKind, WeekPlan, WEEK_DAYS};

/// Fixed warmup block bracketing every intensity session
pub const WARMUP_KM: Decimal = dec!(2);
/// Fixed cooldown block bracketing every intensity session
pub const COOLDOWN_KM: Decimal = dec!(2);

/// Options controlling the week layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// Saturday runs high-intensity instead of a third sub-threshold day
    pub sat_high_intensity: bool,
    /// Monday becomes a rest day
    pub remove_monday: bool,
    /// Friday becomes a rest day
    pub remove_friday: bool,
    /// Overlay endurance/SubT rides onto the week
    pub cycling_enabled: bool,
    /// Weekly ride volume in hours
    pub cycling_hours_per_week: Decimal,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        ScheduleOptions {
            sat_high_intensity: false,
            remove_monday: false,
            remove_friday: false,
            cycling_enabled: false,
            cycling_hours_per_week: Decimal::ZERO,
        }
    }
}

/// Weekly plan construction from zone budgets
pub struct WeekScheduler;

impl WeekScheduler {
    /// Build the Monday-through-Sunday plan
    pub fn schedule(budget: &ZoneBudget, options: &ScheduleOptions) -> WeekPlan {
        // Sub-threshold distance splits over Tue/Thu, plus Sat unless it
        // runs high-intensity
        let sub_threshold_days = if options.sat_high_intensity {
            dec!(2)
        } else {
            dec!(3)
        };
        let sub_threshold_km = budget.sub_threshold.distance_km / sub_threshold_days;

        // Tue, Thu and Sat are intensity days regardless of options; their
        // warmup/cooldown cost comes out of the easy budget only
        let bracket_km = (WARMUP_KM + COOLDOWN_KM) * dec!(3);
        let free_easy_km = (budget.easy.distance_km - bracket_km).max(Decimal::ZERO);

        let mut active_easy_days = dec!(4);
        if options.remove_monday {
            active_easy_days -= dec!(1);
        }
        if options.remove_friday {
            active_easy_days -= dec!(1);
        }
        // Sunday's long run weighs 1.5 easy blocks, hence the half unit
        let easy_block_km = free_easy_km / (active_easy_days + dec!(0.5));
        let long_run_km = easy_block_km * dec!(1.5);

        let rides = RideOverlay::build(options);

        let days = WEEK_DAYS
            .iter()
            .map(|&day| {
                let mut sessions = match day {
                    Weekday::Mon if options.remove_monday => Vec::new(),
                    Weekday::Fri if options.remove_friday => Vec::new(),
                    Weekday::Mon | Weekday::Wed | Weekday::Fri => {
                        vec![Session::run(SessionKind::Easy, easy_block_km)]
                    }
                    Weekday::Tue | Weekday::Thu => {
                        Self::bracketed(SessionKind::SubThreshold, sub_threshold_km)
                    }
                    Weekday::Sat if options.sat_high_intensity => Self::bracketed(
                        SessionKind::HighIntensity,
                        budget.high_intensity.distance_km,
                    ),
                    Weekday::Sat => Self::bracketed(SessionKind::SubThreshold, sub_threshold_km),
                    Weekday::Sun => vec![Session::run(SessionKind::LongRun, long_run_km)],
                };
                rides.append_to(day, options, &mut sessions);
                DayPlan { day, sessions }
            })
            .collect();

        WeekPlan { days }
    }

    /// Intensity session with its fixed warmup/cooldown bracket
    fn bracketed(kind: SessionKind, distance_km: Decimal) -> Vec<Session> {
        vec![
            Session::run(SessionKind::Warmup, WARMUP_KM),
            Session::run(kind, distance_km),
            Session::run(SessionKind::Cooldown, COOLDOWN_KM),
        ]
    }
}

/// Per-day ride amounts for the cycling overlay
///
/// 75% of weekly ride hours go to endurance rides on Mon/Wed/Sun, 25% to
/// SubT rides on Tue/Thu. A removed Monday stays a true rest day, so its
/// endurance share redistributes over Wed/Sun. Friday never gets a ride.
struct RideOverlay {
    endurance_hours: Option<Decimal>,
    sub_threshold_hours: Option<Decimal>,
}

impl RideOverlay {
    fn build(options: &ScheduleOptions) -> Self {
        if !options.cycling_enabled || options.cycling_hours_per_week <= Decimal::ZERO {
            return RideOverlay {
                endurance_hours: None,
                sub_threshold_hours: None,
            };
        }

        let endurance_days = if options.remove_monday {
            dec!(2)
        } else {
            dec!(3)
        };
        RideOverlay {
            endurance_hours: Some(options.cycling_hours_per_week * dec!(0.75) / endurance_days),
            sub_threshold_hours: Some(options.cycling_hours_per_week * dec!(0.25) / dec!(2)),
        }
    }

    /// Append the day's ride after the run sessions, never replacing them
    fn append_to(&self, day: Weekday, options: &ScheduleOptions, sessions: &mut Vec<Session>) {
        match day {
            Weekday::Mon if options.remove_monday => {}
            Weekday::Mon | Weekday::Wed | Weekday::Sun => {
                if let Some(hours) = self.endurance_hours {
                    sessions.push(Session::ride(SessionKind::Endurance, hours));
                }
            }
            Weekday::Tue | Weekday::Thu => {
                if let Some(hours) = self.sub_threshold_hours {
                    sessions.push(Session::ride(SessionKind::SubThreshold, hours));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::ZoneAllocation;
    use crate::models::Activity;

    /// 60 km week at 75/25/0 with paces {5.0, 4.0, 3.5}
    fn reference_budget() -> ZoneBudget {
        ZoneBudget {
            total_time_minutes: dec!(300),
            easy: ZoneAllocation {
                time_minutes: dec!(225),
                distance_km: dec!(45),
            },
            sub_threshold: ZoneAllocation {
                time_minutes: dec!(75),
                distance_km: dec!(18.75),
            },
            high_intensity: ZoneAllocation {
                time_minutes: dec!(0),
                distance_km: dec!(0),
            },
        }
    }

    fn run_distances(day: &DayPlan) -> Vec<Decimal> {
        day.sessions
            .iter()
            .filter(|s| s.activity == Activity::Run)
            .map(|s| s.amount.value)
            .collect()
    }

    #[test]
    fn test_reference_week_layout() {
        let week = WeekScheduler::schedule(&reference_budget(), &ScheduleOptions::default());
        assert_eq!(week.days.len(), 7);

        // Tue/Thu/Sat: warmup 2, subT 18.75/3 = 6.25, cooldown 2
        for day in [Weekday::Tue, Weekday::Thu, Weekday::Sat] {
            let plan = week.day(day).unwrap();
            assert_eq!(run_distances(plan), vec![dec!(2), dec!(6.25), dec!(2)]);
            assert_eq!(plan.sessions[1].kind, SessionKind::SubThreshold);
        }

        // Free easy = 45 - 12 = 33; block = 33 / 4.5 = 7.33
        let monday = week.day(Weekday::Mon).unwrap();
        assert_eq!(monday.sessions[0].kind, SessionKind::Easy);
        assert_eq!(run_distances(monday)[0].round_dp(1), dec!(7.3));

        // Long run = 1.5 blocks = 11.0
        let sunday = week.day(Weekday::Sun).unwrap();
        assert_eq!(sunday.sessions[0].kind, SessionKind::LongRun);
        assert_eq!(run_distances(sunday)[0].round_dp(1), dec!(11.0));
    }

    #[test]
    fn test_remove_monday_redistributes_easy_distance() {
        let options = ScheduleOptions {
            remove_monday: true,
            ..Default::default()
        };
        let week = WeekScheduler::schedule(&reference_budget(), &options);

        assert!(week.day(Weekday::Mon).unwrap().is_rest_day());

        // Divisor drops from 4.5 to 3.5: block = 33 / 3.5 = 9.43
        let wednesday = week.day(Weekday::Wed).unwrap();
        assert_eq!(run_distances(wednesday)[0].round_dp(1), dec!(9.4));
        let sunday = week.day(Weekday::Sun).unwrap();
        assert_eq!(run_distances(sunday)[0].round_dp(1), dec!(14.1)); // 9.43 * 1.5
    }

    #[test]
    fn test_remove_friday_rest_day() {
        let options = ScheduleOptions {
            remove_friday: true,
            ..Default::default()
        };
        let week = WeekScheduler::schedule(&reference_budget(), &options);

        assert!(week.day(Weekday::Fri).unwrap().is_rest_day());
        // Wed still active with the 3.5 divisor
        let wednesday = week.day(Weekday::Wed).unwrap();
        assert_eq!(run_distances(wednesday)[0].round_dp(1), dec!(9.4));
    }

    #[test]
    fn test_saturday_high_intensity() {
        let mut budget = reference_budget();
        budget.high_intensity = ZoneAllocation {
            time_minutes: dec!(28),
            distance_km: dec!(8),
        };
        let options = ScheduleOptions {
            sat_high_intensity: true,
            ..Default::default()
        };
        let week = WeekScheduler::schedule(&budget, &options);

        // Saturday takes the full high-intensity distance, undivided
        let saturday = week.day(Weekday::Sat).unwrap();
        assert_eq!(saturday.sessions[1].kind, SessionKind::HighIntensity);
        assert_eq!(run_distances(saturday), vec![dec!(2), dec!(8), dec!(2)]);

        // Sub-threshold divisor drops from 3 to 2: 18.75 / 2 = 9.375
        let tuesday = week.day(Weekday::Tue).unwrap();
        assert_eq!(run_distances(tuesday)[1], dec!(9.375));
    }

    #[test]
    fn test_cycling_overlay() {
        let options = ScheduleOptions {
            cycling_enabled: true,
            cycling_hours_per_week: dec!(10),
            ..Default::default()
        };
        let week = WeekScheduler::schedule(&reference_budget(), &options);

        // 7.5 endurance hours over Mon/Wed/Sun, 2.5 SubT hours over Tue/Thu
        for day in [Weekday::Mon, Weekday::Wed, Weekday::Sun] {
            let ride = week.day(day).unwrap().sessions.last().unwrap().clone();
            assert_eq!(ride.activity, Activity::Bike);
            assert_eq!(ride.kind, SessionKind::Endurance);
            assert_eq!(ride.amount.value, dec!(2.5));
        }
        for day in [Weekday::Tue, Weekday::Thu] {
            let ride = week.day(day).unwrap().sessions.last().unwrap().clone();
            assert_eq!(ride.activity, Activity::Bike);
            assert_eq!(ride.kind, SessionKind::SubThreshold);
            assert_eq!(ride.amount.value, dec!(1.25));
        }

        // Friday never gets a ride
        let friday = week.day(Weekday::Fri).unwrap();
        assert!(friday.sessions.iter().all(|s| s.activity == Activity::Run));

        // Rides append after the day's runs
        let tuesday = week.day(Weekday::Tue).unwrap();
        assert_eq!(tuesday.sessions.len(), 4);
    }

    #[test]
    fn test_cycling_overlay_with_monday_removed() {
        let options = ScheduleOptions {
            remove_monday: true,
            cycling_enabled: true,
            cycling_hours_per_week: dec!(10),
            ..Default::default()
        };
        let week = WeekScheduler::schedule(&reference_budget(), &options);

        // Monday stays a true rest day; its share moves to Wed/Sun
        assert!(week.day(Weekday::Mon).unwrap().is_rest_day());
        for day in [Weekday::Wed, Weekday::Sun] {
            let ride = week.day(day).unwrap().sessions.last().unwrap().clone();
            assert_eq!(ride.amount.value, dec!(3.75)); // 7.5 / 2
        }
    }

    #[test]
    fn test_cycling_disabled_means_no_rides() {
        let options = ScheduleOptions {
            cycling_enabled: false,
            cycling_hours_per_week: dec!(10),
            ..Default::default()
        };
        let week = WeekScheduler::schedule(&reference_budget(), &options);
        assert!(week.sessions().all(|s| s.activity == Activity::Run));
    }

    #[test]
    fn test_zero_budget_still_well_formed() {
        let budget = ZoneBudget {
            total_time_minutes: dec!(0),
            easy: ZoneAllocation {
                time_minutes: dec!(0),
                distance_km: dec!(0),
            },
            sub_threshold: ZoneAllocation {
                time_minutes: dec!(0),
                distance_km: dec!(0),
            },
            high_intensity: ZoneAllocation {
                time_minutes: dec!(0),
                distance_km: dec!(0),
            },
        };
        let week = WeekScheduler::schedule(&budget, &ScheduleOptions::default());

        assert_eq!(week.days.len(), 7);
        // Day roles stay in place around zero-distance work sessions
        let tuesday = week.day(Weekday::Tue).unwrap();
        assert_eq!(run_distances(tuesday), vec![dec!(2), dec!(0), dec!(2)]);
        let sunday = week.day(Weekday::Sun).unwrap();
        assert_eq!(run_distances(sunday), vec![dec!(0)]);
    }
}
