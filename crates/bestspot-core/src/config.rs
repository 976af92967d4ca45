// crates/bestspot-core/src/config.rs

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;

use bestspot_parser::DayPeriod;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::SensorKind;

/// Acceptable band for one named preference option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRange {
    pub min: f64,
    pub max: f64,
    pub ideal: f64,
}

impl PreferenceRange {
    pub const fn new(min: f64, max: f64, ideal: f64) -> Self {
        Self { min, max, ideal }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConstants {
    pub max_score: f64,
    pub no_data_penalty: f64,
    pub out_of_range_factor: f64,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            max_score: 100.0,
            no_data_penalty: -200.0,
            out_of_range_factor: 5.0,
        }
    }
}

/// The sub-window of the day used when averaging hourly readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeHours {
    pub start: u8,
    pub end: u8,
}

impl Default for OfficeHours {
    fn default() -> Self {
        Self { start: 8, end: 18 }
    }
}

impl OfficeHours {
    pub fn hours(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }

    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.start && hour <= self.end
    }
}

/// Office-hours contribution weight per named day period. Periods with a
/// zero weight never contribute to averages or duration estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodWeights {
    pub early_morning: f64,
    pub morning: f64,
    pub afternoon: f64,
    pub evening: f64,
    pub late_evening: f64,
    pub night: f64,
}

impl Default for PeriodWeights {
    fn default() -> Self {
        Self {
            early_morning: 0.0,
            morning: 4.0,
            afternoon: 4.0,
            evening: 2.0,
            late_evening: 0.0,
            night: 0.0,
        }
    }
}

impl PeriodWeights {
    pub fn weight(&self, period: DayPeriod) -> f64 {
        match period {
            DayPeriod::EarlyMorning => self.early_morning,
            DayPeriod::Morning => self.morning,
            DayPeriod::Afternoon => self.afternoon,
            DayPeriod::Evening => self.evening,
            DayPeriod::LateEvening => self.late_evening,
            DayPeriod::Night => self.night,
        }
    }
}

/// Complete engine configuration: scoring constants, averaging windows and
/// the three named-option threshold tables. Loadable from TOML; the built-in
/// default covers the standard option names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConstants,
    pub office_hours: OfficeHours,
    pub period_weights: PeriodWeights,
    /// Minimum milliseconds between "computation done" and surfacing the
    /// result. Enforced by the caller, not the engine.
    pub surface_delay_ms: u64,
    pub lighting: BTreeMap<String, PreferenceRange>,
    pub noise: BTreeMap<String, PreferenceRange>,
    pub temperature: BTreeMap<String, PreferenceRange>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let lighting = BTreeMap::from([
            ("dim".to_string(), PreferenceRange::new(0.0, 300.0, 200.0)),
            ("moderate".to_string(), PreferenceRange::new(301.0, 500.0, 400.0)),
            ("well-lit".to_string(), PreferenceRange::new(501.0, 1000.0, 700.0)),
            ("bright".to_string(), PreferenceRange::new(1001.0, 2000.0, 1200.0)),
        ]);
        let noise = BTreeMap::from([
            ("silent".to_string(), PreferenceRange::new(0.0, 30.0, 25.0)),
            ("focus-work".to_string(), PreferenceRange::new(0.0, 45.0, 35.0)),
            ("collaborative".to_string(), PreferenceRange::new(46.0, 65.0, 55.0)),
            ("lively".to_string(), PreferenceRange::new(66.0, 85.0, 75.0)),
        ]);
        let temperature = BTreeMap::from([
            ("cool".to_string(), PreferenceRange::new(18.0, 21.0, 20.0)),
            (
                "stable-comfortable".to_string(),
                PreferenceRange::new(21.0, 24.0, 22.5),
            ),
            ("warm".to_string(), PreferenceRange::new(24.0, 27.0, 25.5)),
        ]);

        Self {
            scoring: ScoringConstants::default(),
            office_hours: OfficeHours::default(),
            period_weights: PeriodWeights::default(),
            surface_delay_ms: 1500,
            lighting,
            noise,
            temperature,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn table(&self, kind: SensorKind) -> &BTreeMap<String, PreferenceRange> {
        match kind {
            SensorKind::Light => &self.lighting,
            SensorKind::Noise => &self.noise,
            SensorKind::Temperature => &self.temperature,
        }
    }

    /// Threshold range for a named option within a preference family.
    pub fn range_for(&self, kind: SensorKind, option: &str) -> Option<&PreferenceRange> {
        self.table(kind).get(option)
    }

    /// Known option names for a family, in deterministic order.
    pub fn option_names(&self, kind: SensorKind) -> Vec<&str> {
        self.table(kind).keys().map(String::as_str).collect()
    }
}

pub static DEFAULT_CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::default);
