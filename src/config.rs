//! Persisted planner defaults
//!
//! TOML configuration under the platform config directory. The config
//! only seeds `PlanInput` defaults; every computation still runs from an
//! explicit input snapshot.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ZonePercentages;
use crate::planner::PlanInput;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Configuration metadata
    pub metadata: ConfigMetadata,

    /// Default plan inputs
    pub defaults: PlanDefaults,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Default inputs used when the CLI flags leave a value unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDefaults {
    pub weekly_distance_km: Decimal,
    pub race_distance_km: Decimal,
    pub race_time: String,
    pub easy_percent: Decimal,
    pub sub_threshold_percent: Decimal,
    pub high_intensity_percent: Decimal,
    pub sat_high_intensity: bool,
    pub remove_monday: bool,
    pub remove_friday: bool,
    pub cycling_enabled: bool,
    pub cycling_hours_per_week: Decimal,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let now = Utc::now();
        PlannerConfig {
            metadata: ConfigMetadata {
                version: "1".to_string(),
                created_at: now,
                updated_at: now,
            },
            defaults: PlanDefaults {
                weekly_distance_km: dec!(60),
                race_distance_km: dec!(10),
                race_time: "50:00".to_string(),
                easy_percent: dec!(75),
                sub_threshold_percent: dec!(25),
                high_intensity_percent: dec!(0),
                sat_high_intensity: false,
                remove_monday: false,
                remove_friday: false,
                cycling_enabled: false,
                cycling_hours_per_week: dec!(0),
            },
        }
    }
}

impl PlannerConfig {
    /// Default config file location under the platform config directory
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine config directory")?;
        Ok(base.join("planrs").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist yet
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config: {}", path.as_ref().display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.as_ref().display()))
    }

    /// Save to the default location
    pub fn save(&mut self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.metadata.updated_at = Utc::now();
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config dir: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("failed to write config: {}", path.as_ref().display()))
    }

    /// Seed a plan input from the stored defaults
    pub fn to_input(&self) -> PlanInput {
        PlanInput {
            weekly_distance_km: self.defaults.weekly_distance_km,
            race_distance_km: self.defaults.race_distance_km,
            race_time_text: self.defaults.race_time.clone(),
            percentages: ZonePercentages {
                easy: self.defaults.easy_percent,
                sub_threshold: self.defaults.sub_threshold_percent,
                high_intensity: self.defaults.high_intensity_percent,
            },
            sat_high_intensity: self.defaults.sat_high_intensity,
            remove_monday: self.defaults.remove_monday,
            remove_friday: self.defaults.remove_friday,
            cycling_enabled: self.defaults.cycling_enabled,
            cycling_hours_per_week: self.defaults.cycling_hours_per_week,
        }
    }

    /// All configurable keys with their current values
    pub fn list(&self) -> Vec<(&'static str, String)> {
        let d = &self.defaults;
        vec![
            ("weekly_distance_km", d.weekly_distance_km.to_string()),
            ("race_distance_km", d.race_distance_km.to_string()),
            ("race_time", d.race_time.clone()),
            ("easy_percent", d.easy_percent.to_string()),
            ("sub_threshold_percent", d.sub_threshold_percent.to_string()),
            ("high_intensity_percent", d.high_intensity_percent.to_string()),
            ("sat_high_intensity", d.sat_high_intensity.to_string()),
            ("remove_monday", d.remove_monday.to_string()),
            ("remove_friday", d.remove_friday.to_string()),
            ("cycling_enabled", d.cycling_enabled.to_string()),
            ("cycling_hours_per_week", d.cycling_hours_per_week.to_string()),
        ]
    }

    /// Get one key's current value
    pub fn get(&self, key: &str) -> Option<String> {
        self.list()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Set one key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let d = &mut self.defaults;
        match key {
            "weekly_distance_km" => d.weekly_distance_km = parse_decimal(key, value)?,
            "race_distance_km" => d.race_distance_km = parse_decimal(key, value)?,
            "race_time" => d.race_time = value.to_string(),
            "easy_percent" => d.easy_percent = parse_decimal(key, value)?,
            "sub_threshold_percent" => d.sub_threshold_percent = parse_decimal(key, value)?,
            "high_intensity_percent" => d.high_intensity_percent = parse_decimal(key, value)?,
            "sat_high_intensity" => d.sat_high_intensity = parse_bool(key, value)?,
            "remove_monday" => d.remove_monday = parse_bool(key, value)?,
            "remove_friday" => d.remove_friday = parse_bool(key, value)?,
            "cycling_enabled" => d.cycling_enabled = parse_bool(key, value)?,
            "cycling_hours_per_week" => d.cycling_hours_per_week = parse_decimal(key, value)?,
            _ => return Err(anyhow!("unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal> {
    value
        .parse()
        .with_context(|| format!("{} expects a number, got {:?}", key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("{} expects true or false, got {:?}", key, value))
}
