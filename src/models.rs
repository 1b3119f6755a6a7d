use chrono::Weekday;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activities a session can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Run,
    Bike,
}

/// Intensity zones used for weekly load distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Easy,
    SubThreshold,
    HighIntensity,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Easy => write!(f, "Easy"),
            Zone::SubThreshold => write!(f, "Sub-threshold"),
            Zone::HighIntensity => write!(f, "High intensity"),
        }
    }
}

/// Session kinds for categorizing planned work
///
/// Runs use `Easy`, `SubThreshold`, `HighIntensity`, `Warmup`, `Cooldown`
/// and `LongRun`; rides use `Endurance` and `SubThreshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Easy,
    SubThreshold,
    HighIntensity,
    Warmup,
    Cooldown,
    LongRun,
    Endurance,
}

impl SessionKind {
    /// Zone bucket this kind counts toward when summing weekly load
    pub fn zone(&self) -> Zone {
        match self {
            SessionKind::Easy
            | SessionKind::LongRun
            | SessionKind::Warmup
            | SessionKind::Cooldown
            | SessionKind::Endurance => Zone::Easy,
            SessionKind::SubThreshold => Zone::SubThreshold,
            SessionKind::HighIntensity => Zone::HighIntensity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Easy => "Easy",
            SessionKind::SubThreshold => "SubT",
            SessionKind::HighIntensity => "High intensity",
            SessionKind::Warmup => "Warmup",
            SessionKind::Cooldown => "Cooldown",
            SessionKind::LongRun => "Long run",
            SessionKind::Endurance => "Endurance",
        }
    }
}

/// Unit attached to a session amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountUnit {
    Kilometers,
    Hours,
}

impl AmountUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            AmountUnit::Kilometers => "km",
            AmountUnit::Hours => "h",
        }
    }
}

/// Magnitude of a session, carried numerically
///
/// The formatted "X.X km" / "X.X h" string is derived on display; the
/// numeric value stays authoritative for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub value: Decimal,
    pub unit: AmountUnit,
}

impl Amount {
    pub fn kilometers(value: Decimal) -> Self {
        Amount {
            value,
            unit: AmountUnit::Kilometers,
        }
    }

    pub fn hours(value: Decimal) -> Self {
        Amount {
            value,
            unit: AmountUnit::Hours,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .value
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.1} {}", rounded, self.unit.suffix())
    }
}

/// A single planned session, immutable once produced by the scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub activity: Activity,
    pub kind: SessionKind,
    pub amount: Amount,
}

impl Session {
    pub fn run(kind: SessionKind, distance_km: Decimal) -> Self {
        Session {
            activity: Activity::Run,
            kind,
            amount: Amount::kilometers(distance_km),
        }
    }

    pub fn ride(kind: SessionKind, hours: Decimal) -> Self {
        Session {
            activity: Activity::Bike,
            kind,
            amount: Amount::hours(hours),
        }
    }

    /// Human-readable one-liner, e.g. "Easy 7.3 km" or "SubT ride 1.3 h"
    pub fn describe(&self) -> String {
        match self.activity {
            Activity::Run => format!("{} {}", self.kind.label(), self.amount),
            Activity::Bike => format!("{} ride {}", self.kind.label(), self.amount),
        }
    }
}

/// One calendar day of the plan; an empty session list is a rest day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub sessions: Vec<Session>,
}

impl DayPlan {
    pub fn rest(day: Weekday) -> Self {
        DayPlan {
            day,
            sessions: Vec::new(),
        }
    }

    pub fn is_rest_day(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Fixed Monday-through-Sunday ordering used by the scheduler and display
pub const WEEK_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A full week of day plans, Monday through Sunday
///
/// Rebuilt in full on every computation; there is no persisted history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    pub fn day(&self, day: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == day)
    }

    /// All sessions in week order
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.days.iter().flat_map(|d| d.sessions.iter())
    }
}

/// Share of total weekly time assigned to each zone, in percent
///
/// The three values are applied independently to the derived weekly time
/// total; their sum is deliberately not validated or normalized to 100.
/// A sum over 100 legitimately overshoots the nominal weekly goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonePercentages {
    pub easy: Decimal,
    pub sub_threshold: Decimal,
    pub high_intensity: Decimal,
}

impl ZonePercentages {
    pub fn get(&self, zone: Zone) -> Decimal {
        match zone {
            Zone::Easy => self.easy,
            Zone::SubThreshold => self.sub_threshold,
            Zone::HighIntensity => self.high_intensity,
        }
    }

    pub fn sum(&self) -> Decimal {
        self.easy + self.sub_threshold + self.high_intensity
    }
}

impl Default for ZonePercentages {
    fn default() -> Self {
        ZonePercentages {
            easy: dec!(75),
            sub_threshold: dec!(25),
            high_intensity: dec!(0),
        }
    }
}

/// Training paces in minutes per kilometer, one per zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPaces {
    /// Easy pace (slowest)
    pub easy: Decimal,
    /// Sub-threshold pace
    pub sub_threshold: Decimal,
    /// High-intensity pace (fastest)
    pub high_intensity: Decimal,
}

impl TrainingPaces {
    pub fn get(&self, zone: Zone) -> Decimal {
        match zone {
            Zone::Easy => self.easy,
            Zone::SubThreshold => self.sub_threshold,
            Zone::HighIntensity => self.high_intensity,
        }
    }
}
