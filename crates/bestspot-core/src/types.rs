// crates/bestspot-core/src/types.rs

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A sensor value that may be missing. Replaces the ad-hoc "N/A" sentinel
/// the source data mixes into numeric fields, so missing data is handled
/// exhaustively instead of via repeated NaN checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Measured(f64),
    Unavailable,
}

impl Measurement {
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Measurement::Measured(v),
            _ => Measurement::Unavailable,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Measurement::Measured(v) => Some(*v),
            Measurement::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Measurement::Measured(_))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Measured(v) => write!(f, "{v}"),
            Measurement::Unavailable => f.write_str("N/A"),
        }
    }
}

// Serialized as a plain number, or the literal "N/A" when unavailable, so
// downstream consumers see the shape they already expect.
impl Serialize for Measurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Measurement::Measured(v) => serializer.serialize_f64(*v),
            Measurement::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

/// The three environmental criteria a zone is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Light,
    Noise,
    Temperature,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [SensorKind::Light, SensorKind::Noise, SensorKind::Temperature];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Light => "light",
            SensorKind::Noise => "noise",
            SensorKind::Temperature => "temperature",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per sensor criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SensorTriple<T> {
    pub light: T,
    pub noise: T,
    pub temperature: T,
}

impl<T> SensorTriple<T> {
    pub fn get(&self, kind: SensorKind) -> &T {
        match kind {
            SensorKind::Light => &self.light,
            SensorKind::Noise => &self.noise,
            SensorKind::Temperature => &self.temperature,
        }
    }

    pub fn get_mut(&mut self, kind: SensorKind) -> &mut T {
        match kind {
            SensorKind::Light => &mut self.light,
            SensorKind::Noise => &mut self.noise,
            SensorKind::Temperature => &mut self.temperature,
        }
    }
}

/// Score of a single zone/criterion pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionScore {
    pub value: f64,
    pub met: bool,
}

/// Named preference option per family, as chosen by the user. `None` means
/// the family was not selected and contributes nothing to the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSelection {
    pub lighting: Option<String>,
    pub noise: Option<String>,
    pub temperature: Option<String>,
}

impl PreferenceSelection {
    pub fn is_empty(&self) -> bool {
        self.lighting.is_none() && self.noise.is_none() && self.temperature.is_none()
    }
}

/// Position label of a ranked zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rank {
    #[serde(rename = "Best Match")]
    BestMatch,
    #[serde(rename = "2nd Choice")]
    SecondChoice,
    #[serde(rename = "3rd Choice")]
    ThirdChoice,
    #[serde(rename = "Info Unavailable")]
    InfoUnavailable,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::BestMatch => "Best Match",
            Rank::SecondChoice => "2nd Choice",
            Rank::ThirdChoice => "3rd Choice",
            Rank::InfoUnavailable => "Info Unavailable",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully scored zone as surfaced to the presentation layer. Created only by
/// the ranker and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredZone {
    pub zone_id: String,
    pub light: Measurement,
    pub noise: Measurement,
    pub temperature: Measurement,
    pub feels_like_temp: Measurement,
    pub original_comfort_score: f64,
    pub comfort_score: f64,
    pub criteria_met_count: u32,
    pub scores: SensorTriple<Option<f64>>,
    pub met_criteria: SensorTriple<bool>,
    pub duration_text: SensorTriple<Option<String>>,
    pub rank: Rank,
}

/// Final engine output: exactly three ranked zones (padded with placeholders
/// when fewer exist).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub zones: Vec<ScoredZone>,
}
