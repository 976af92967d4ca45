use std::fmt;

use serde::{Deserialize, Serialize};

/// Named slice of the day used by the descriptive-period CSV layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayPeriod {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    LateEvening,
    Night,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 6] = [
        DayPeriod::EarlyMorning,
        DayPeriod::Morning,
        DayPeriod::Afternoon,
        DayPeriod::Evening,
        DayPeriod::LateEvening,
        DayPeriod::Night,
    ];

    /// Header spelling used by the source CSV exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayPeriod::EarlyMorning => "Early Morning",
            DayPeriod::Morning => "Morning",
            DayPeriod::Afternoon => "Afternoon",
            DayPeriod::Evening => "Evening",
            DayPeriod::LateEvening => "Late evening",
            DayPeriod::Night => "Night",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DayPeriod {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "early morning" => Ok(DayPeriod::EarlyMorning),
            "morning" => Ok(DayPeriod::Morning),
            "afternoon" => Ok(DayPeriod::Afternoon),
            "evening" => Ok(DayPeriod::Evening),
            "late evening" => Ok(DayPeriod::LateEvening),
            "night" => Ok(DayPeriod::Night),
            other => Err(format!("unknown day period '{other}'")),
        }
    }
}

/// Key of one entry in a zone's time series: either a named period or an
/// hour-of-day label ("0".."23"), depending on the source layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeKey {
    Period(DayPeriod),
    Hour(u8),
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeKey::Period(period) => f.write_str(period.as_str()),
            TimeKey::Hour(hour) => write!(f, "{hour}"),
        }
    }
}

/// One time-series entry. `value` is `None` when the source cell was empty
/// or non-numeric; the entry itself is never omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    pub key: TimeKey,
    pub value: Option<f64>,
}

/// Per-zone time series for one sensor type, in source column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneReading {
    pub zone_id: String,
    pub series: Vec<TimeSample>,
}

impl ZoneReading {
    pub fn new(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            series: Vec::new(),
        }
    }

    pub fn push(&mut self, key: TimeKey, value: Option<f64>) {
        self.series.push(TimeSample { key, value });
    }

    /// Numeric value for `key`, if the series has an entry with data for it.
    pub fn value_at(&self, key: &TimeKey) -> Option<f64> {
        self.series
            .iter()
            .find(|sample| sample.key == *key)
            .and_then(|sample| sample.value)
    }

    /// True when the series is keyed by hour labels rather than named periods.
    pub fn is_hourly(&self) -> bool {
        matches!(
            self.series.first(),
            Some(TimeSample {
                key: TimeKey::Hour(_),
                ..
            })
        )
    }
}

/// One row of the ambient-to-perceived temperature lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeelsLikeEntry {
    pub ambient_temp: f64,
    pub feels_like: f64,
}
