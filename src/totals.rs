//! Week plan aggregation
//!
//! Re-derives zone-level and activity-level sums from a finished plan.
//! Totals are a read-only projection: session amounts stay numeric all
//! the way through, so no formatted text is ever parsed back.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{Activity, SessionKind, TrainingPaces, WeekPlan, Zone};

/// Summed time and distance for one run zone bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneTotals {
    pub time_minutes: Decimal,
    pub distance_km: Decimal,
}

/// Summed ride hours per ride kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BikeTotals {
    pub endurance_hours: Decimal,
    pub sub_threshold_hours: Decimal,
}

impl BikeTotals {
    pub fn total_hours(&self) -> Decimal {
        self.endurance_hours + self.sub_threshold_hours
    }
}

/// Aggregate weekly load per zone and activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub easy: ZoneTotals,
    pub sub_threshold: ZoneTotals,
    pub high_intensity: ZoneTotals,
    pub bike: BikeTotals,
    /// Run time across all zones plus ride hours
    pub total_time_minutes: Decimal,
}

impl Totals {
    pub fn zone(&self, zone: Zone) -> &ZoneTotals {
        match zone {
            Zone::Easy => &self.easy,
            Zone::SubThreshold => &self.sub_threshold,
            Zone::HighIntensity => &self.high_intensity,
        }
    }

    pub fn run_time_minutes(&self) -> Decimal {
        self.easy.time_minutes + self.sub_threshold.time_minutes + self.high_intensity.time_minutes
    }
}

/// One bar of the load-distribution view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub hours: Decimal,
}

/// Totals and chart derivation over a week plan
pub struct WeekAggregator;

impl WeekAggregator {
    /// Sum the plan per zone bucket and activity
    ///
    /// Run buckets: Easy, LongRun, Warmup and Cooldown count as easy;
    /// session time is re-derived from the carried distance and the
    /// bucket's pace (warmup/cooldown at easy pace).
    pub fn aggregate(week: &WeekPlan, paces: &TrainingPaces) -> Totals {
        let mut easy = ZoneTotals::default();
        let mut sub_threshold = ZoneTotals::default();
        let mut high_intensity = ZoneTotals::default();
        let mut bike = BikeTotals::default();

        for session in week.sessions() {
            match session.activity {
                Activity::Run => {
                    let zone = session.kind.zone();
                    let bucket = match zone {
                        Zone::Easy => &mut easy,
                        Zone::SubThreshold => &mut sub_threshold,
                        Zone::HighIntensity => &mut high_intensity,
                    };
                    bucket.distance_km += session.amount.value;
                    bucket.time_minutes += session.amount.value * paces.get(zone);
                }
                Activity::Bike => match session.kind {
                    SessionKind::SubThreshold => {
                        bike.sub_threshold_hours += session.amount.value;
                    }
                    _ => bike.endurance_hours += session.amount.value,
                },
            }
        }

        let total_time_minutes = easy.time_minutes
            + sub_threshold.time_minutes
            + high_intensity.time_minutes
            + bike.total_hours() * dec!(60);

        Totals {
            easy,
            sub_threshold,
            high_intensity,
            bike,
            total_time_minutes,
        }
    }

    /// Ordered series for the load-distribution view, in hours
    pub fn chart_series(totals: &Totals) -> Vec<ChartPoint> {
        let mut series = vec![
            ChartPoint {
                label: Zone::Easy.to_string(),
                hours: totals.easy.time_minutes / dec!(60),
            },
            ChartPoint {
                label: Zone::SubThreshold.to_string(),
                hours: totals.sub_threshold.time_minutes / dec!(60),
            },
            ChartPoint {
                label: Zone::HighIntensity.to_string(),
                hours: totals.high_intensity.time_minutes / dec!(60),
            },
        ];
        if totals.bike.total_hours() > Decimal::ZERO {
            series.push(ChartPoint {
                label: "Cycling".to_string(),
                hours: totals.bike.total_hours(),
            });
        }
        series
    }
}
