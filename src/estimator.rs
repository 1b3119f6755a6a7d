//! Training pace estimation from a single race performance
//!
//! Derives a fitness score and the three training paces (easy,
//! sub-threshold, high-intensity) from a race distance and finish time.
//! The score is a simplified proxy index, not a validated physiological
//! measure; its formula shape is part of the output contract.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EstimationError, PlanError, Result};
use crate::models::TrainingPaces;

/// A race performance used as estimator input
///
/// Ephemeral; recomputed from the raw inputs on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub distance_km: Decimal,
    pub time_seconds: u32,
}

impl RaceResult {
    /// Build a race result from a distance and "MM:SS" time text
    ///
    /// The parse is permissive: malformed minute or second fields read as
    /// zero and never fail the whole operation. Degenerate durations are
    /// rejected later, by the estimator.
    pub fn from_time_text(distance_km: Decimal, time_text: &str) -> Self {
        RaceResult {
            distance_km,
            time_seconds: parse_race_time(time_text),
        }
    }

    pub fn total_minutes(&self) -> Decimal {
        Decimal::from(self.time_seconds) / dec!(60)
    }
}

/// Derived training paces plus the single-number fitness score
///
/// Owned by the caller and replaced atomically on re-estimation; there is
/// no partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessEstimate {
    pub score: i32,
    pub paces: TrainingPaces,
}

/// Pace estimation from race performance
pub struct PaceEstimator;

impl PaceEstimator {
    /// Estimate training paces and fitness score
    ///
    /// Average speed v = distance / minutes * 60 (km/h); each pace is a
    /// fixed constant over v/10 so the relative intensity ratios stay
    /// anchored to the estimated speed:
    /// - easy: 7.5 / (v/10)
    /// - sub-threshold: 6 / (v/10)
    /// - high-intensity: 5 / (v/10)
    ///
    /// Score = round(10 + 2v).
    pub fn estimate(distance_km: Decimal, time_text: &str) -> Result<FitnessEstimate> {
        let race = RaceResult::from_time_text(distance_km, time_text);
        Self::estimate_from_race(&race).map_err(|err| match err {
            // Report the caller's original text, not the parsed seconds
            PlanError::Estimation(EstimationError::DegenerateTime { .. }) => {
                EstimationError::DegenerateTime {
                    time_text: time_text.to_string(),
                }
                .into()
            }
            other => other,
        })
    }

    pub fn estimate_from_race(race: &RaceResult) -> Result<FitnessEstimate> {
        if race.distance_km <= Decimal::ZERO {
            return Err(EstimationError::InvalidDistance {
                distance: race.distance_km.to_string(),
            }
            .into());
        }

        let total_minutes = race.total_minutes();
        if total_minutes <= Decimal::ZERO {
            return Err(EstimationError::DegenerateTime {
                time_text: format!("{}s", race.time_seconds),
            }
            .into());
        }

        let speed_kmh = race.distance_km / total_minutes * dec!(60);
        let score = (dec!(10) + dec!(2) * speed_kmh)
            .round()
            .to_i32()
            .unwrap_or(i32::MAX);

        let tenth = speed_kmh / dec!(10);
        Ok(FitnessEstimate {
            score,
            paces: TrainingPaces {
                easy: dec!(7.5) / tenth,
                sub_threshold: dec!(6) / tenth,
                high_intensity: dec!(5) / tenth,
            },
        })
    }
}

/// Parse "MM:SS" race time text into total seconds
///
/// Malformed fields parse as zero; a missing seconds field is zero.
fn parse_race_time(time_text: &str) -> u32 {
    let mut parts = time_text.splitn(2, ':');
    let minutes: u32 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(0);
    let seconds: u32 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(0);
    minutes * 60 + seconds
}

/// Format a pace in minutes per kilometer as "M:SS min/km"
///
/// Seconds round half to even; a 60-second result carries one minute and
/// resets seconds to zero (3.993 min/km renders "4:00", never "3:60").
pub fn format_pace(pace_min_per_km: Decimal) -> String {
    let mut minutes = pace_min_per_km.trunc();
    let mut seconds = ((pace_min_per_km - minutes) * dec!(60)).round();
    if seconds >= dec!(60) {
        minutes += dec!(1);
        seconds = Decimal::ZERO;
    }
    format!(
        "{}:{:02} min/km",
        minutes.to_i64().unwrap_or(0),
        seconds.to_i64().unwrap_or(0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_race_time() {
        assert_eq!(parse_race_time("40:00"), 2400);
        assert_eq!(parse_race_time("25:30"), 1530);
        assert_eq!(parse_race_time(" 18 : 45 "), 1125);
        // Missing seconds field reads as zero
        assert_eq!(parse_race_time("40"), 2400);
        // Malformed fields read as zero, never fail
        assert_eq!(parse_race_time("ab:cd"), 0);
        assert_eq!(parse_race_time("40:xx"), 2400);
        assert_eq!(parse_race_time(""), 0);
    }

    #[test]
    fn test_estimate_from_10k() {
        // 10 km in 40:00 -> v = 15 km/h
        let estimate = PaceEstimator::estimate(dec!(10), "40:00").unwrap();

        assert_eq!(estimate.score, 40); // 10 + 2*15 = 40
        assert_eq!(estimate.paces.easy, dec!(5)); // 7.5 / 1.5
        assert_eq!(estimate.paces.sub_threshold, dec!(4)); // 6 / 1.5
        // 5 / 1.5 = 3.333...
        assert_eq!(estimate.paces.high_intensity.round_dp(4), dec!(3.3333));
    }

    #[test]
    fn test_estimate_pace_ordering() {
        let estimate = PaceEstimator::estimate(dec!(5), "25:00").unwrap();
        // Easy is slowest, high-intensity fastest
        assert!(estimate.paces.easy > estimate.paces.sub_threshold);
        assert!(estimate.paces.sub_threshold > estimate.paces.high_intensity);
    }

    #[test]
    fn test_estimate_rejects_degenerate_time() {
        let result = PaceEstimator::estimate(dec!(10), "ab:cd");
        assert!(result.is_err());

        let result = PaceEstimator::estimate(dec!(10), "00:00");
        assert!(result.is_err());
    }

    #[test]
    fn test_estimate_rejects_nonpositive_distance() {
        assert!(PaceEstimator::estimate(dec!(0), "40:00").is_err());
        assert!(PaceEstimator::estimate(dec!(-5), "40:00").is_err());
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(dec!(5.0)), "5:00 min/km");
        assert_eq!(format_pace(dec!(4.5)), "4:30 min/km");
        assert_eq!(format_pace(dec!(3.3333)), "3:20 min/km");
    }

    #[test]
    fn test_format_pace_carries_sixty_seconds() {
        // 0.9917 * 60 = 59.502 -> 60 -> carry the minute
        assert_eq!(format_pace(dec!(3.9917)), "4:00 min/km");
        assert_eq!(format_pace(dec!(3.993)), "4:00 min/km");
        // Just below the carry threshold
        assert_eq!(format_pace(dec!(3.99)), "3:59 min/km");
    }
}
