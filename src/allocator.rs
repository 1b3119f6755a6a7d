//! Weekly zone budget allocation
//!
//! Converts a weekly distance goal, zone-time percentages and training
//! paces into per-zone time and distance budgets. The week's total
//! training time is anchored to the easy pace applied to the distance
//! goal; every zone percentage is a share of that single derived total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CalculationError;
use crate::models::{TrainingPaces, Zone, ZonePercentages};

/// Time and distance allotted to one zone for the week
///
/// Invariant: `distance_km = time_minutes / pace` for the zone's pace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneAllocation {
    pub time_minutes: Decimal,
    pub distance_km: Decimal,
}

/// Per-zone weekly budgets plus the derived total training time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBudget {
    pub total_time_minutes: Decimal,
    pub easy: ZoneAllocation,
    pub sub_threshold: ZoneAllocation,
    pub high_intensity: ZoneAllocation,
}

impl ZoneBudget {
    pub fn zone(&self, zone: Zone) -> &ZoneAllocation {
        match zone {
            Zone::Easy => &self.easy,
            Zone::SubThreshold => &self.sub_threshold,
            Zone::HighIntensity => &self.high_intensity,
        }
    }
}

/// Zone budget calculation
pub struct ZoneAllocator;

impl ZoneAllocator {
    /// Allocate weekly time and distance budgets per zone
    ///
    /// `total_time_minutes = weekly_distance_km * easy_pace`; per zone,
    /// `time = total * percent / 100` and `distance = time / pace`.
    /// Percentages are applied independently, without normalization to
    /// 100; a sum over 100 overshoots the nominal weekly goal and that is
    /// accepted input behavior. A negative distance goal degrades to zero.
    pub fn allocate(
        weekly_distance_km: Decimal,
        percentages: &ZonePercentages,
        paces: &TrainingPaces,
    ) -> ZoneBudget {
        let weekly = weekly_distance_km.max(Decimal::ZERO);
        let total_time_minutes = weekly * paces.easy;

        ZoneBudget {
            total_time_minutes,
            easy: Self::allocate_zone(total_time_minutes, percentages, paces, Zone::Easy),
            sub_threshold: Self::allocate_zone(
                total_time_minutes,
                percentages,
                paces,
                Zone::SubThreshold,
            ),
            high_intensity: Self::allocate_zone(
                total_time_minutes,
                percentages,
                paces,
                Zone::HighIntensity,
            ),
        }
    }

    fn allocate_zone(
        total_time_minutes: Decimal,
        percentages: &ZonePercentages,
        paces: &TrainingPaces,
        zone: Zone,
    ) -> ZoneAllocation {
        let time_minutes = total_time_minutes * percentages.get(zone) / dec!(100);
        let distance_km = match checked_div(time_minutes, paces.get(zone), "zone distance") {
            Ok(distance) => distance,
            Err(err) => {
                // Unset pace degrades to zero distance, never a panic
                warn!(%zone, "{}", err);
                Decimal::ZERO
            }
        };

        ZoneAllocation {
            time_minutes,
            distance_km,
        }
    }
}

/// Division with an explicit zero-denominator guard
fn checked_div(
    numerator: Decimal,
    denominator: Decimal,
    calculation: &str,
) -> Result<Decimal, CalculationError> {
    if denominator == Decimal::ZERO {
        return Err(CalculationError::DivisionByZero {
            calculation: calculation.to_string(),
        });
    }
    Ok(numerator / denominator)
}
